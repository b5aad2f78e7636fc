use leptos::*;
use shared::AppConfig;

use crate::{
    config, file_calc,
    interactive_plot::InteractiveRenderer,
    render::{self, ScatterRenderer},
    static_plot::StaticRenderer,
};

#[component]
fn Calculator(config: AppConfig) -> impl IntoView {
    let ids = config.ids;

    let on_change = {
        let ids = ids.clone();
        move |_: ev::Event| {
            let ids = ids.clone();
            spawn_local(async move {
                match file_calc::calculate_selected(&ids).await {
                    Ok(processed) => log::debug!("processed {processed} file(s)"),
                    Err(err) => log::error!("file calculation failed: {err}"),
                }
            });
        }
    };

    view! {
        <section class="calculator">
            <input id={ids.local_file} type="file" multiple on:change=on_change/>
            <div id={ids.calculation_result}></div>
        </section>
    }
}

/// NB: both plots draw from one RNG, seeded from the config when set.
#[component]
fn Plots(config: AppConfig) -> impl IntoView {
    let rng = store_value(render::plot_rng(config.seed));
    let sample_count = config.sample_count;
    let static_renderer = StaticRenderer::new(config.static_plot.clone());
    let interactive_renderer = InteractiveRenderer::from_config(&config);
    let static_id = config.ids.graph_area;
    let interactive_id = config.ids.graph_area_interactive;

    let draw = move |renderer: &dyn ScatterRenderer, target: &str| {
        rng.update_value(|rng| {
            if let Err(err) = render::draw_fresh(renderer, rng, sample_count, target) {
                log::error!("drawing into {target:?} failed: {err}");
            }
        });
    };

    let on_static = {
        let target = static_id.clone();
        move |_: ev::MouseEvent| draw(&static_renderer, &target)
    };
    let on_interactive = {
        let target = interactive_id.clone();
        move |_: ev::MouseEvent| draw(&interactive_renderer, &target)
    };

    view! {
        <section class="plots">
            <div class="buttons">
                <button on:click=on_static>"Static plot"</button>
                <button on:click=on_interactive>"Interactive plot"</button>
            </div>
            <div id={static_id}></div>
            <div id={interactive_id}></div>
        </section>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = config::load();
    log::debug!("config: {config:?}");

    view! {
        <main class="container">
            <Calculator config=config.clone()/>
            <Plots config=config/>
        </main>
    }
}

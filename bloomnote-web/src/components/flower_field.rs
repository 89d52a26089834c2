use yew::prelude::*;

const FLOWERS: [&str; 3] = ["🌸", "🌷", "🌺"];

/// Decorative fixed background layer of ten floating flowers.
///
/// Positions and animations derive from the index alone so the field looks
/// the same on every load.
#[function_component(FlowerField)]
pub fn flower_field() -> Html {
    html! {
        <div class="pointer-events-none fixed inset-0 overflow-hidden opacity-30" data-testid="flower-field">
            { for (0..10).map(|index| {
                let motion = if index % 2 == 0 { "animate-bounce" } else { "animate-pulse" };
                let style = format!("top: {}%; left: {}%;", (index * 10) % 90, (index * 12) % 90);
                html! {
                    <div class={classes!("absolute", "text-4xl", motion)} style={style}>
                        { FLOWERS[index % FLOWERS.len()] }
                    </div>
                }
            }) }
        </div>
    }
}

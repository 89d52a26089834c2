use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="py-6 text-center text-rose-400 text-sm">
            { "Built with so much care, flowers, pink, and missing-you energy. 💖" }
        </footer>
    }
}

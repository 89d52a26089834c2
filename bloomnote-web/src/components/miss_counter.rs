use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub count: u32,
    pub on_miss: Callback<()>,
}

#[function_component(MissCounter)]
pub fn miss_counter(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_miss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="bg-white/80 rounded-3xl shadow-md p-6 flex flex-col gap-4">
            <h2 class="text-2xl font-semibold text-rose-900 flex items-center gap-2">{ "🌷 Miss counter" }</h2>
            <p class="text-rose-700">
                { "Every time you think of me (or I think of you), press this. \
                   Let's see how dramatic I am about missing you. Spoiler: very." }
            </p>
            <div class="flex flex-wrap items-center gap-4">
                <button
                    id="miss-btn"
                    onclick={onclick}
                    class="bg-gradient-to-r from-rose-400 to-pink-400 text-white font-semibold px-6 py-3 rounded-full shadow-md hover:shadow-lg transition"
                >
                    { "I miss her right now 💖" }
                </button>
                <div class="flex items-baseline gap-2 bg-rose-50 rounded-2xl px-4 py-3">
                    <span class="text-4xl font-bold text-rose-500" data-testid="miss-count">{ p.count.to_string() }</span>
                    <span class="text-rose-400 text-sm">{ "times I missed you" }</span>
                </div>
            </div>
            <p class="text-xs text-rose-400">
                { "This number stays even if you close the tab. Because missing you doesn't go away that easily 🥺" }
            </p>
        </section>
    }
}

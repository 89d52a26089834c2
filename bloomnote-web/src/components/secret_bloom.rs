use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    /// Nickname as addressed in the letter; "you" when cleared.
    pub address: AttrValue,
    pub on_toggle: Callback<()>,
}

#[function_component(SecretBloom)]
pub fn secret_bloom(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let button_surface = if p.open {
        "bg-pink-100 shadow-inner"
    } else {
        "bg-gradient-to-b from-pink-400 to-rose-400 shadow-lg"
    };
    html! {
        <>
            <section class="bg-white/80 rounded-3xl shadow-md p-6 flex flex-col sm:flex-row gap-6 items-center">
                <div class="flex-1">
                    <h2 class="text-2xl font-semibold text-rose-900 mb-2 flex items-center gap-2">{ "🌸 Secret Bloom just for you" }</h2>
                    <p class="text-rose-700 mb-4">{ "Tap the pink envelope to open a little garden letter from me. I promise it's soft and full of you." }</p>
                    <p class="text-sm text-rose-400">{ "A cute surprise never hurts, right?" }</p>
                </div>
                <button
                    id="secret-toggle-btn"
                    onclick={onclick}
                    class={classes!(
                        "relative", "transition-all", "duration-300", "rounded-2xl",
                        "px-6", "py-5", "text-white", "flex", "flex-col", "items-center", "gap-2",
                        button_surface
                    )}
                >
                    <span class="text-3xl">{ if p.open { "💗" } else { "💌" } }</span>
                    <span class="text-sm font-semibold">{ if p.open { "Close it" } else { "Open it!" } }</span>
                </button>
            </section>
            if p.open {
                <div class="bg-rose-50 border border-rose-100 rounded-3xl p-6 shadow-inner flex flex-col gap-3 animate-pulse" data-testid="secret-letter">
                    <p class="text-sm uppercase tracking-wide text-rose-400 font-semibold">{ "my soft message" }</p>
                    <p class="text-lg text-rose-900">
                        { format!("{}, you became a necessity in my life in the most unexpected way. \
                           I miss you in the fun moments, in the quiet ones, and in every time I see something cute or flowery.", p.address) }
                    </p>
                    <p class="text-rose-700">{ "Thank you for existing exactly the way you do — bubbly, lovely, and sunshine-level pretty. Please stay." }</p>
                    <p class="text-right text-rose-500 font-medium">{ "— cutu:) , thinking of you 🌷" }</p>
                </div>
            }
        </>
    }
}

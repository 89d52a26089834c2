use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub singing: bool,
    /// Nickname the bird sings for; "you" when cleared.
    pub address: AttrValue,
    pub on_toggle: Callback<()>,
}

/// Purely cosmetic animated bird with a play/pause toggle.
#[function_component(Cuckoo)]
pub fn cuckoo(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let perch_motion = if p.singing { Some("animate-bounce") } else { None };
    let call_motion = if p.singing { Some("animate-pulse") } else { None };
    html! {
        <section class="bg-white/80 rounded-3xl shadow-md p-6 flex flex-col gap-4 items-center text-center">
            <div class="flex items-center gap-3">
                <h2 class="text-2xl font-semibold text-rose-900">{ "🐦 My cute cuckooooo!" }</h2>
                <button
                    id="cuckoo-toggle-btn"
                    onclick={onclick}
                    class="text-xs bg-rose-100 text-rose-500 px-3 py-1 rounded-full font-medium"
                >
                    { if p.singing { "Pause" } else { "Make it sing" } }
                </button>
            </div>
            <p class="text-rose-700">{ "Because even the birds should know you are special." }</p>
            <div class="relative flex items-center justify-center w-full">
                <div class={classes!(
                    "flex", "items-center", "justify-center",
                    "bg-gradient-to-b", "from-rose-200", "to-pink-200",
                    "w-28", "h-28", "rounded-full", "shadow-inner", "border-4", "border-pink-100",
                    perch_motion
                )}>
                    <div class="bg-rose-500 w-10 h-10 rounded-full relative">
                        <div class="absolute -right-3 top-2 w-4 h-3 bg-yellow-200 rounded-tr-full rounded-br-full rotate-12"></div>
                        <div class="absolute -left-4 top-4 w-5 h-5 bg-rose-300 rounded-full animate-ping"></div>
                    </div>
                </div>
                <div class="ml-6 flex flex-col items-start gap-2">
                    <p class={classes!("text-3xl", "font-extrabold", "text-rose-500", "drop-shadow-sm", call_motion)}>
                        { "Cuckoooooooo!!" }
                    </p>
                    <p class="bg-rose-50 text-rose-500 rounded-full px-3 py-1 text-xs font-medium">
                        { format!("singing just for {} 💕", p.address) }
                    </p>
                </div>
            </div>
        </section>
    }
}

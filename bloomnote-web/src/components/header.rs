use bloomnote_core::Bloom;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub nickname: AttrValue,
    pub bloom: Bloom,
    pub on_nickname_change: Callback<String>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_nickname_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    html! {
        <header class="bg-white/70 backdrop-blur-sm rounded-3xl shadow-md p-6 flex flex-col gap-4">
            <p class="text-sm uppercase tracking-wide text-rose-400 font-semibold">{ "Hey pretty flower" }</p>
            <h1 class="text-3xl sm:text-4xl font-bold text-rose-900">{ "You are very, very important to me." }</h1>
            <p class="text-rose-700">
                { "In such a tiny span of time, you slipped into my days like sunshine and now I cannot imagine a day without you. \
                   You are cute, chaotic, kind, and absolutely the best in the world. This little page is just to remind you that I miss you a lot. 🌷" }
            </p>
            <div class="flex flex-wrap gap-3 items-center">
                <label class="flex items-center gap-2 bg-rose-50 rounded-full px-3 py-1">
                    <span class="text-sm text-rose-500">{ "Your name here:" }</span>
                    <input
                        id="nickname-input"
                        class="bg-transparent text-rose-800 font-semibold focus:outline-none placeholder:text-rose-300"
                        value={p.nickname.clone()}
                        placeholder="my flower"
                        aria-label="Your nickname"
                        oninput={oninput}
                    />
                </label>
                <div class="flex items-center gap-2 bg-rose-100 rounded-full px-3 py-1" data-testid="bloom-chip">
                    <span class="text-lg">{ p.bloom.emoji.clone() }</span>
                    <span class="text-sm">
                        { "Today's bloom: " }
                        <span class="font-semibold">{ p.bloom.name.clone() }</span>
                        { format!(" — {}", p.bloom.message) }
                    </span>
                </div>
            </div>
        </header>
    }
}

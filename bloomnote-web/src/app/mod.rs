pub mod handlers;
pub mod state;

use crate::components::cuckoo::Cuckoo;
use crate::components::flower_field::FlowerField;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::miss_counter::MissCounter;
use crate::components::secret_bloom::SecretBloom;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let page = state::use_page_state();
    let handlers = handlers::build_handlers(&page);
    let session = &*page.session;

    html! {
        <main class="relative min-h-screen bg-gradient-to-b from-pink-50 via-rose-50 to-pink-100 text-rose-900">
            <FlowerField />
            <div class="relative z-10 max-w-4xl mx-auto px-6 py-10 flex flex-col gap-8">
                <Header
                    nickname={AttrValue::from(session.nickname().to_string())}
                    bloom={session.bloom().clone()}
                    on_nickname_change={handlers.nickname_change}
                />
                <SecretBloom
                    open={session.secret_open()}
                    address={AttrValue::from(session.display_nickname().to_string())}
                    on_toggle={handlers.toggle_secret}
                />
                <MissCounter
                    count={session.miss_count()}
                    on_miss={handlers.record_miss}
                />
                <Cuckoo
                    singing={session.cuckoo_singing()}
                    address={AttrValue::from(session.display_nickname().to_string())}
                    on_toggle={handlers.toggle_cuckoo}
                />
                <Footer />
            </div>
        </main>
    }
}

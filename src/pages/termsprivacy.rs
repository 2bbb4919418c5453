use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="legal-page">
            <h1>{"Terms of Service"}</h1>
            <p>{"Pulseboard is provided as-is while in public beta. Don't resell access, don't \
                hammer the API beyond your plan's limits, and don't use the service to process \
                data you have no right to process."}</p>
            <p>{"Paid plans renew monthly and can be cancelled at any time from the workspace \
                settings; cancellation takes effect at the end of the billing period."}</p>
            <p>{"We may update these terms as the product evolves and will announce material \
                changes in the app at least 30 days in advance."}</p>
            <Link<Route> to={Route::Home} classes="legal-back">{"Back to home"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <h1>{"Privacy Policy"}</h1>
            <p>{"Pulseboard reads metrics from the sources you connect and stores only the \
                aggregates needed to render your boards. Raw events stay in your warehouse."}</p>
            <p>{"The marketing site itself keeps a single preference in your browser's local \
                storage: your light/dark theme choice. No analytics cookies, no trackers."}</p>
            <p>{"Questions about data handling? Write to privacy@pulseboard.dev and a human will \
                answer."}</p>
            <Link<Route> to={Route::Home} classes="legal-back">{"Back to home"}</Link<Route>>
        </div>
    }
}

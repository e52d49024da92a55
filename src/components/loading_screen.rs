use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub message: AttrValue,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    html! {
        <div class="loading">
            <div class="spinner" />
            <p>{ props.message.clone() }</p>
        </div>
    }
}

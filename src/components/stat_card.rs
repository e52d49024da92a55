use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub tone: Option<AttrValue>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let class = match &props.tone {
        Some(tone) => format!("stat-card {}", tone),
        None => "stat-card".to_string(),
    };

    html! {
        <div {class}>
            <div class="stat-content">
                <div class="stat-label">{ props.label.clone() }</div>
                <div class="stat-value">{ props.value.clone() }</div>
            </div>
        </div>
    }
}

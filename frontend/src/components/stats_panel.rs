use run_tracker_lib::readout::Distance;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct StatsPanelProps {
    pub active: bool,
    pub distance: Distance,
    pub duration: String,
    pub on_toggle: Callback<()>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let on_toggle = props.on_toggle.clone();
    let onclick = Callback::from(move |_| {
        on_toggle.emit(());
    });

    let (label, class) = if props.active {
        ("Stop Run", classes!("start-btn", "active"))
    } else {
        ("Start Run", classes!("start-btn"))
    };

    html! {
        <div class="stats-panel">
            <div class="stat">
                <span class="stat-value">{props.distance.to_string()}</span>
                <label>{"km"}</label>
            </div>
            <div class="stat">
                <span class="stat-value">{props.duration.clone()}</span>
                <label>{"duration"}</label>
            </div>
            <button {onclick} {class}>{label}</button>
        </div>
    }
}

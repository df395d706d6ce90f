use trip_tracker_lib::format::{CheckboxTag, DisplayCell, TimeTag};
use yew::prelude::*;

pub fn cell_html(cell: &DisplayCell) -> Html {
    match cell {
        DisplayCell::Empty => html! {},
        DisplayCell::Text(text) => html! { <>{ text.clone() }</> },
        DisplayCell::Time(tag) => time_tag_html(tag),
        DisplayCell::Checkbox(tag) => checkbox_html(*tag),
    }
}

pub fn time_tag_html(tag: &TimeTag) -> Html {
    html! {
        <time datetime={tag.date_time.clone()} title={tag.title.clone()}>
            { tag.text.clone() }
        </time>
    }
}

pub fn checkbox_html(tag: CheckboxTag) -> Html {
    html! { <input type="checkbox" checked={tag.checked} disabled={tag.disabled} /> }
}

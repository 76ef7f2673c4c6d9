use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct TableProps {
    pub headers: Vec<f::AttrValue>,
    pub rows: Vec<Vec<f::Html>>,
    /// Shown across all columns when `rows` is empty.
    #[prop_or_default]
    pub empty_message: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Table)]
pub fn table(props: &TableProps) -> f::Html {
    let class = f::class_list(&["table", "table-zebra", "w-full"], &props.class);
    let span = props.headers.len().max(1).to_string();
    f::html! {
        <div class="overflow-x-auto">
            <table class={class}>
                <thead>
                    <tr>
                        { for props.headers.iter().map(|head| f::html! { <th scope="col">{ head.clone() }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    if props.rows.is_empty() {
                        <tr>
                            <td colspan={span} class="text-center text-base-content/60">
                                { props.empty_message.clone().unwrap_or_else(|| "Nothing to show.".into()) }
                            </td>
                        </tr>
                    } else {
                        { for props.rows.iter().map(|row| f::html! {
                            <tr>
                                { for row.iter().map(|cell| f::html! { <td>{ cell.clone() }</td> }) }
                            </tr>
                        }) }
                    }
                </tbody>
            </table>
        </div>
    }
}

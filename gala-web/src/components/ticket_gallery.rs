use gala_catalog::{format_price, TicketOffering, TicketTier};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TicketGalleryProps {
    pub offerings: &'static [TicketOffering],
    pub selected: Option<TicketTier>,
    pub on_select: Callback<TicketTier>,
}

#[function_component(TicketGallery)]
pub fn ticket_gallery(props: &TicketGalleryProps) -> Html {
    html! {
        <div class="ticket-gallery">
            { for props.offerings.iter().map(|offering| {
                let is_selected = props.selected == Some(offering.id);
                let onclick = {
                    let on_select = props.on_select.clone();
                    let tier = offering.id;
                    Callback::from(move |_: MouseEvent| on_select.emit(tier))
                };

                html! {
                    <div
                        key={offering.id.id()}
                        class={classes!("ticket-card", is_selected.then_some("selected"))}
                        {onclick}
                    >
                        <img src={offering.image_ref} alt={offering.display_name} />
                        <div class="ticket-price">
                            <span>{ format_price(offering.price) }</span>
                        </div>
                        <div class="ticket-name">
                            <span>{ offering.display_name }</span>
                        </div>
                        if is_selected {
                            <div class="ticket-check">{ "✓" }</div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

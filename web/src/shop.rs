use colheita_core as game;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShopProps {
    pub coins: u32,
    pub seeds: u32,
    #[prop_or_default]
    pub hidden: bool,
    pub on_buy_seed: Callback<()>,
}

/// Seed stall, the purchase itself is decided by the engine so a click with no coins still goes through.
#[function_component]
pub(crate) fn ShopView(props: &ShopProps) -> Html {
    let onclick = {
        let on_buy_seed = props.on_buy_seed.clone();
        Callback::from(move |_: MouseEvent| on_buy_seed.emit(()))
    };

    html! {
        <section class={classes!("shop-screen", props.hidden.then_some("hidden"))}>
            <h2>{"Shop"}</h2>
            <article class="shop-item">
                <span class="icon">{"🌱"}</span>
                <p>{format!("1 seed for {} coin", game::SEED_PRICE)}</p>
                <p class="owned">{format!("{} coins, {} seeds", props.coins, props.seeds)}</p>
                <button id="buy-seed-btn" {onclick}>{"Buy"}</button>
            </article>
        </section>
    }
}

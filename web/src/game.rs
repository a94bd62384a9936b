use crate::shop::ShopView;
use crate::utils::*;
use chrono::prelude::*;
use clap::Args;
use colheita_core as game;
use game::{Action, Changes, TileIndex, ToTileIndex};
use gloo::timers::callback::Interval;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// What the grid shows for a tile, a pest hides whatever stage is underneath.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TileIcon {
    Empty,
    Seed,
    Sprout,
    Budding,
    Mature,
    Bug,
}

impl TileIcon {
    fn for_tile(tile: game::Tile) -> Self {
        use TileIcon::*;

        if tile.pest {
            return Bug;
        }
        match tile.stage {
            0 => Empty,
            1 => Seed,
            2 => Sprout,
            3 => Budding,
            _ => Mature,
        }
    }

    const fn glyph(self) -> &'static str {
        use TileIcon::*;
        match self {
            Empty => "",
            Seed => "🌱",
            Sprout => "🌿",
            Budding => "🌼",
            Mature => "🌽",
            Bug => "🐛",
        }
    }

    const fn class(self) -> &'static str {
        use TileIcon::*;
        match self {
            Empty => "empty",
            Seed => "seed",
            Sprout => "sprout",
            Budding => "budding",
            Mature => "mature",
            Bug => "bug",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Screen {
    #[default]
    Farm,
    Shop,
}

impl Screen {
    const ALL: [Screen; 2] = [Screen::Farm, Screen::Shop];

    const fn label(self) -> &'static str {
        match self {
            Screen::Farm => "Farm",
            Screen::Shop => "Shop",
        }
    }
}

const fn action_label(action: Action) -> &'static str {
    match action {
        Action::Plant => "Plant",
        Action::Water => "Water",
        Action::RemovePest => "Remove pest",
        Action::Harvest => "Harvest",
    }
}

const fn action_id(action: Action) -> &'static str {
    match action {
        Action::Plant => "action-plant",
        Action::Water => "action-water",
        Action::RemovePest => "action-remove",
        Action::Harvest => "action-harvest",
    }
}

fn experience_text(player: &game::PlayerState) -> String {
    format!("{}/{}", player.experience, player.experience_to_next_level())
}

fn parse_seed(seed: &str) -> Option<u64> {
    seed.parse()
        .map_err(|err| log::warn!("ignoring seed {:?}: {}", seed, err))
        .ok()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    TileClick(TileIndex),
    SelectAction(Action),
    ShowScreen(Screen),
    BuySeed,
    UpdateTime,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    index: TileIndex,
    tile: game::Tile,
    callback: Callback<TileIndex>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        index,
        tile,
        callback,
    } = props.clone();

    let icon = TileIcon::for_tile(tile);
    let mut class = classes!("tile", icon.class());
    if tile.is_dry() {
        class.push(format!("dry-{}", tile.dryness));
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("tile {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {onclick}><span>{icon.glyph()}</span></td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Seed for pest rolls instead of a random one
    #[arg(short, long)]
    seed: Option<String>,
}

/// The controller: applies messages to the engine, persists what changed and renders the result.
#[derive(Debug)]
pub(crate) struct GameView {
    engine: game::FarmEngine,
    action: Action,
    screen: Screen,
    schedule: game::TickSchedule,
    last_poll: DateTime<Utc>,
    next_tick_secs: u64,
    _timer_interval: Interval,
}

impl GameView {
    const POLL_MILLIS: u32 = 1000;

    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(Self::POLL_MILLIS, move || link.send_message(Msg::UpdateTime))
    }

    fn click_tile(&mut self, index: TileIndex) -> Changes {
        match self.engine.apply(self.action, index) {
            Ok(outcome) => outcome.changes(),
            Err(err) => {
                log::error!("{:?} on tile {} failed: {}", self.action, index, err);
                Changes::empty()
            }
        }
    }

    fn buy_seed(&mut self) -> Changes {
        match self.engine.buy_seed() {
            Ok(changes) => changes,
            Err(err) => {
                log::debug!("purchase refused: {}", err);
                gloo::dialogs::alert(&err.to_string());
                Changes::empty()
            }
        }
    }

    /// Runs every tick that came due since the last poll.
    fn run_due_ticks(&mut self) -> Changes {
        let now = utc_now();
        let elapsed = (now - self.last_poll).to_std().unwrap_or_default();
        self.last_poll = now;

        let due = self.schedule.advance(elapsed);
        if due > 1 {
            log::debug!("catching up on {} ticks", due);
        }
        (0..due).fold(Changes::empty(), |changes, _| {
            changes | self.engine.tick().changes()
        })
    }

    fn update_countdown(&mut self) -> bool {
        let next_tick_secs = self.schedule.until_next().as_secs_f64().ceil() as u64;
        let updated = self.next_tick_secs != next_tick_secs;
        self.next_tick_secs = next_tick_secs;
        updated
    }

    fn persist(&self, changes: Changes) {
        if changes.contains(Changes::PLAYER) {
            self.engine.player().local_save();
        }
        if changes.contains(Changes::FARM) {
            self.engine.farm().local_save();
        }
    }

    fn view_top_bar(&self) -> Html {
        let player = self.engine.player();

        html! {
            <header class="top-bar">
                <span id="coins-display" class="coins">{player.coins.to_string()}</span>
                <span id="usd-display" class="usd">{player.usd.to_string()}</span>
                <span id="seeds-display" class="seeds">{player.seeds.to_string()}</span>
                <span id="level" class="level">{format!("Lv. {}", player.level)}</span>
                <span id="xp-text" class="xp">{experience_text(player)}</span>
            </header>
        }
    }

    fn view_side_nav(&self, ctx: &Context<Self>) -> Html {
        html! {
            <nav class="side">
                {
                    for Screen::ALL.into_iter().map(|screen| {
                        let class = classes!("side-btn", (screen == self.screen).then_some("active"));
                        let onclick = ctx.link().callback(move |_: MouseEvent| Msg::ShowScreen(screen));
                        html! {
                            <button {class} {onclick}>{screen.label()}</button>
                        }
                    })
                }
            </nav>
        }
    }

    fn view_farm(&self, ctx: &Context<Self>) -> Html {
        let (rows, cols) = game::GRID_SIZE;
        let class = classes!("farm-screen", (self.screen != Screen::Farm).then_some("hidden"));

        html! {
            <section {class}>
                <menu class="actions">
                    {
                        for Action::ALL.into_iter().map(|action| {
                            let class = classes!("action-btn", (action == self.action).then_some("active"));
                            let onclick = ctx.link().callback(move |_: MouseEvent| Msg::SelectAction(action));
                            html! {
                                <button id={action_id(action)} {class} {onclick}>{action_label(action)}</button>
                            }
                        })
                    }
                </menu>
                <table class="farm">
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..cols).map(|col| {
                                        let index = (row, col).to_tile_index();
                                        let tile = self.engine.tile_at(index);
                                        let callback = ctx.link().callback(Msg::TileClick);
                                        html! {
                                            <TileView {index} {tile} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <small class="next-tick">{format!("next tick in {}s", self.next_tick_secs)}</small>
            </section>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx
            .props()
            .seed
            .as_deref()
            .and_then(parse_seed)
            .unwrap_or_else(js_random_seed);
        log::debug!("pest seed: {}", seed);

        let engine = game::FarmEngine::new(
            LocalOrDefault::local_or_default(),
            LocalOrDefault::local_or_default(),
            seed,
        );
        let schedule = game::TickSchedule::default();

        Self {
            engine,
            action: Action::default(),
            screen: Screen::default(),
            schedule,
            last_poll: utc_now(),
            next_tick_secs: schedule.interval().as_secs(),
            _timer_interval: GameView::create_timer(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let changes = match msg {
            TileClick(index) => self.click_tile(index),
            SelectAction(action) => {
                let updated = self.action != action;
                self.action = action;
                return updated;
            }
            ShowScreen(screen) => {
                let updated = self.screen != screen;
                self.screen = screen;
                return updated;
            }
            BuySeed => self.buy_seed(),
            UpdateTime => {
                let changes = self.run_due_ticks();
                let countdown_changed = self.update_countdown();
                self.persist(changes);
                return countdown_changed || !changes.is_empty();
            }
        };

        self.persist(changes);
        !changes.is_empty()
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let player = self.engine.player();
        let on_buy_seed = ctx.link().callback(|_: ()| Msg::BuySeed);

        html! {
            <div class="colheita">
                {self.view_top_bar()}
                {self.view_side_nav(ctx)}
                <main>
                    {self.view_farm(ctx)}
                    <ShopView
                        coins={player.coins}
                        seeds={player.seeds}
                        hidden={self.screen != Screen::Shop}
                        {on_buy_seed}
                    />
                </main>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(stage: game::Stage, pest: bool) -> game::Tile {
        game::Tile {
            stage,
            dryness: 1,
            pest,
        }
    }

    #[test]
    fn each_stage_has_its_own_icon() {
        let icons: Vec<_> = (0..=game::MATURE_STAGE)
            .map(|stage| TileIcon::for_tile(tile(stage, false)))
            .collect();

        assert_eq!(
            icons,
            [
                TileIcon::Empty,
                TileIcon::Seed,
                TileIcon::Sprout,
                TileIcon::Budding,
                TileIcon::Mature
            ]
        );
        assert_eq!(TileIcon::Empty.glyph(), "");
    }

    #[test]
    fn pest_overrides_every_stage() {
        for stage in 0..=game::MATURE_STAGE {
            assert_eq!(TileIcon::for_tile(tile(stage, true)), TileIcon::Bug);
        }
    }

    #[test]
    fn experience_text_shows_progress_towards_next_level() {
        let player = game::PlayerState {
            experience: 7,
            level: 3,
            ..Default::default()
        };

        assert_eq!(experience_text(&player), "7/60");
    }

    #[test]
    fn seed_flag_must_be_a_number() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed("banana"), None);
    }

    #[test]
    fn action_buttons_are_distinct() {
        let ids: Vec<_> = Action::ALL.into_iter().map(action_id).collect();

        assert_eq!(
            ids,
            ["action-plant", "action-water", "action-remove", "action-harvest"]
        );
        assert_eq!(action_label(Action::RemovePest), "Remove pest");
    }
}

//! Weather widget - terminal front end

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{DebugRunOutput, DebugSession, DebugSessionError, ReplayItem};
use weather_widget::action::Action;
use weather_widget::api::WeatherClient;
use weather_widget::components::search_bar::{SEARCH_HEIGHT, SEARCH_WIDTH};
use weather_widget::components::{
    Component, SearchBar, SearchBarProps, WeatherDisplay, WeatherDisplayProps,
};
use weather_widget::config::{Args, Config};
use weather_widget::effect::Effect;
use weather_widget::i18n::Label;
use weather_widget::logging;
use weather_widget::reducer::reducer;
use weather_widget::state::AppState;

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WidgetComponentId {
    Display,
    Search,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WidgetContext {
    Main,
    Search,
}

impl EventRoutingState<WidgetComponentId, WidgetContext> for AppState {
    fn focused(&self) -> Option<WidgetComponentId> {
        if self.search_mode {
            Some(WidgetComponentId::Search)
        } else {
            Some(WidgetComponentId::Display)
        }
    }

    fn modal(&self) -> Option<WidgetComponentId> {
        if self.search_mode {
            Some(WidgetComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: WidgetComponentId) -> WidgetContext {
        match id {
            WidgetComponentId::Display => WidgetContext::Main,
            WidgetComponentId::Search => WidgetContext::Search,
        }
    }

    fn default_context(&self) -> WidgetContext {
        WidgetContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    let client = match config.client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let _log_guard = match &config.log_file {
        Some(path) => Some(logging::init(path)?),
        None => None,
    };
    tracing::info!(city = %config.city, language = %config.language, "starting weather widget");

    let debug = DebugSession::new(args.debug);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let initial = config.initial_state();
    let state = debug
        .load_state_or_else_async(move || async move { Ok::<AppState, io::Error>(initial) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, client, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    tracing::info!("weather widget stopped");
    Ok(())
}

struct WidgetUi {
    display: WeatherDisplay,
    search: SearchBar,
}

impl WidgetUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay,
            search: SearchBar::new(),
        }
    }

    fn search_props<'a>(state: &'a AppState, is_focused: bool) -> SearchBarProps<'a> {
        SearchBarProps {
            query: &state.search_input,
            placeholder: state.language.label(Label::Search),
            is_focused,
            palette: state.theme.palette(),
            on_change: Action::SearchInput,
            on_submit: Action::SearchSubmit,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WidgetComponentId>,
    ) {
        event_ctx.set_component_area(WidgetComponentId::Display, area);

        let props = WeatherDisplayProps {
            state,
            is_focused: render_ctx.is_focused() && !state.search_mode,
        };
        self.display.render(frame, area, props);

        self.search.set_open(state.search_mode);
        if state.search_mode {
            let modal_area = centered_rect(SEARCH_WIDTH, SEARCH_HEIGHT, area);
            event_ctx.set_component_area(WidgetComponentId::Search, modal_area);
            let props = Self::search_props(state, render_ctx.is_focused());
            self.search.render(frame, area, props);
        } else {
            event_ctx
                .component_areas
                .remove(&WidgetComponentId::Search);
        }
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        self.search.set_open(state.search_mode);
        let props = Self::search_props(state, true);
        let actions: Vec<_> = self.search.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: WeatherClient,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WidgetUi::new()));
    let mut bus: EventBus<AppState, Action, WidgetComponentId, WidgetContext> = EventBus::new();
    let keybindings: Keybindings<WidgetContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(WidgetComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(WidgetComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::WeatherFetch),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(&client, effect, ctx),
        )
        .await
}

/// Handle effects by spawning tasks. Every fetch shares one task key, so a
/// new search aborts the one still in flight.
fn handle_effect(client: &WeatherClient, effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::FetchWeather { city, request } => {
            let client = client.clone();
            ctx.tasks().spawn("weather", async move {
                match client.fetch_current(&city).await {
                    Ok(data) => Action::WeatherDidLoad { request, data },
                    Err(e) => Action::WeatherDidError {
                        request,
                        error: e.to_string(),
                    },
                }
            });
        }
    }
}

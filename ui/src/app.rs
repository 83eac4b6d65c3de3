use crate::{state::State, widgets};

pub struct AdminApp {
    state: State,
    /// Whether the initial list fetch has been requested yet.
    started: bool,
}

impl AdminApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            started: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for AdminApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The list loads as soon as the screen exists.
        if !self.started {
            self.started = true;
            self.state.users.request_refetch();
        }

        // Drain async responses before rendering this frame.
        widgets::users::poll_users_responses(&mut self.state.users, ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Userdesk");
                widgets::version_label(ui);
            });
        });

        let graphql_url = self.state.config.graphql_url();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Admin Users");
            ui.separator();
            widgets::users::users_panel(&mut self.state.users, &graphql_url, ui);
        });
    }
}

//! Stack navigation over named screens.

/// A full-window page that can be mounted on a route.
pub trait Screen {
    fn title(&self) -> &str;

    /// Draw one frame.
    fn ui(&mut self, ctx: &egui::Context);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenOptions {
    pub header_shown: bool,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self { header_shown: true }
    }
}

struct Route {
    name: &'static str,
    screen: Box<dyn Screen>,
    options: ScreenOptions,
}

/// Routes registered up front, with a history stack of visited route indices.
pub struct StackNavigator {
    initial_route: &'static str,
    routes: Vec<Route>,
    stack: Vec<usize>,
}

impl StackNavigator {
    pub fn new(initial_route: &'static str) -> Self {
        Self {
            initial_route,
            routes: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Register `screen` under `name`. The initial route is mounted as soon
    /// as it is registered.
    pub fn screen(mut self, name: &'static str, screen: Box<dyn Screen>, options: ScreenOptions) -> Self {
        if self.routes.iter().any(|route| route.name == name) {
            log::warn!("Route {} registered twice, keeping the first", name);
            return self;
        }
        self.routes.push(Route { name, screen, options });
        if name == self.initial_route && self.stack.is_empty() {
            self.stack.push(self.routes.len() - 1);
        }
        self
    }

    pub fn current_route(&self) -> Option<&'static str> {
        self.stack.last().map(|&index| self.routes[index].name)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push `name` on the stack. Navigating to the current route does nothing.
    pub fn navigate(&mut self, name: &str) -> bool {
        let Some(index) = self.routes.iter().position(|route| route.name == name) else {
            log::warn!("No route named {}", name);
            return false;
        };
        if self.stack.last() == Some(&index) {
            return false;
        }
        self.stack.push(index);
        true
    }

    /// Pop the current route. The root route stays.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let Some(&index) = self.stack.last() else {
            return;
        };
        let can_go_back = self.stack.len() > 1;
        let route = &mut self.routes[index];

        let mut back = false;
        if route.options.header_shown {
            egui::TopBottomPanel::top(egui::Id::new(("header", route.name))).show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if can_go_back && ui.button("<").clicked() {
                        back = true;
                    }
                    ui.heading(route.screen.title());
                });
            });
        }
        route.screen.ui(ctx);

        if back {
            self.go_back();
        }
    }
}

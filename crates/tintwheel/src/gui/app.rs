use crate::config;
use crate::events::AppEvent;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use huewheel::{CairoSurface, ColourWheel, Point, Selection, WheelConfig, WheelError};
use relm4::prelude::*;
use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub type Wheel = ColourWheel<CairoSurface>;

fn report_selection(selection: &Selection) {
    log::info!("Selected {}", selection);
    let _ = writeln!(std::io::stdout().lock(), "{selection}");
}

pub fn build_wheel(config: WheelConfig) -> Result<Wheel, WheelError> {
    let surface = CairoSurface::new(config.surface_side())?;
    ColourWheel::new(config, surface, report_selection)
}

pub fn reload_wheel(config_path: &Path) -> anyhow::Result<Wheel> {
    let config = config::load_config(config_path)?;
    let wheel_config = WheelConfig::try_from(config.wheel)?;
    Ok(build_wheel(wheel_config)?)
}

pub struct AppModel {
    pub wheel: Rc<RefCell<Wheel>>,
    pub config_path: PathBuf,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Click(Point),
    Hover(Point),
    Reset,
    SelectHue(usize),
    SelectShade(usize),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Reset => AppMsg::Reset,
            AppEvent::SelectHue(i) => AppMsg::SelectHue(i),
            AppEvent::SelectShade(i) => AppMsg::SelectShade(i),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Wheel, PathBuf, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("tintwheel"),
            add_css_class: "tintwheel-window",
            set_resizable: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "tintwheel-canvas",

                add_controller = gtk::EventControllerMotion {
                    connect_motion[sender] => move |_, x, y| {
                        sender.input(AppMsg::Hover(Point::new(x, y)));
                    }
                },

                add_controller = gtk::GestureClick {
                    set_button: gtk::gdk::BUTTON_PRIMARY,
                    connect_pressed[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Click(Point::new(x, y)));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (wheel, config_path, rx) = init;

        theme::load_css();

        let model = AppModel {
            wheel: Rc::new(RefCell::new(wheel)),
            config_path,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        window::fit_to_wheel(
            &model.drawing_area,
            model.wheel.borrow().config().surface_side(),
        );

        let wheel_draw = model.wheel.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = draw(
                    cr,
                    &wheel_draw.borrow(),
                    &colors,
                    width as f64,
                    height as f64,
                ) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Click(point) => {
                let surface_box = self.surface_box();
                let result = self.wheel.borrow_mut().click(point, surface_box);
                self.after_pick(result);
            }
            AppMsg::Hover(point) => {
                let surface_box = self.surface_box();
                if let Some(cursor) = self.wheel.borrow().hover(point, surface_box) {
                    window::apply_cursor(&self.drawing_area, cursor);
                }
            }
            AppMsg::Reset => {
                if let Err(e) = self.wheel.borrow_mut().control().reset() {
                    log::error!("Failed to reset wheel: {}", e);
                }
                self.drawing_area.queue_draw();
            }
            AppMsg::SelectHue(index) => {
                let result = self.wheel.borrow_mut().control().select_hue(index);
                self.after_pick(result);
            }
            AppMsg::SelectShade(index) => {
                let result = self.wheel.borrow_mut().control().select_shade(index);
                self.after_pick(result);
            }
            AppMsg::ConfigReload => match reload_wheel(&self.config_path) {
                Ok(wheel) => {
                    window::fit_to_wheel(&self.drawing_area, wheel.config().surface_side());
                    *self.wheel.borrow_mut() = wheel;
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config, keeping current wheel: {:#}", e),
            },
            AppMsg::Quit => self.root.close(),
        }
    }
}

impl AppModel {
    fn surface_box(&self) -> huewheel::SurfaceBox {
        let side = self.wheel.borrow().config().surface_side();
        window::surface_box(&self.drawing_area, side)
    }

    fn after_pick(&self, result: Result<Option<Selection>, WheelError>) {
        match result {
            Ok(Some(_)) => self.drawing_area.queue_draw(),
            Ok(None) => {}
            Err(e) => {
                log::error!("Selection failed: {}", e);
                self.drawing_area.queue_draw();
            }
        }
    }
}

fn draw(
    cr: &cairo::Context,
    wheel: &Wheel,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let (r, g, b, a) = colors.background.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.paint()?;

    let origin = window::centered_box(width, height, wheel.config().surface_side());
    cr.set_source_surface(wheel.surface().image(), origin.left, origin.top)?;
    cr.paint()
}

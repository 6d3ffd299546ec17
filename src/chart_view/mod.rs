//! GPUI host view for a [`PcpChart`].

mod input;
mod renderer;

pub use input::AXIS_HIT_RADIUS;

use crate::chart::PcpChart;
use crate::theme::ChartTheme;
use gpui::prelude::*;
use gpui::{
    canvas, div, Bounds, Context, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent,
    Pixels, Point, Window,
};
use input::PcpInputHandler;
use parking_lot::RwLock;
use renderer::{paint_frame, to_hsla};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Shared handle on the chart inside a [`PcpView`], cheap to clone into tasks
/// that load or replace data.
#[derive(Clone)]
pub struct PcpHandle {
    chart: Arc<RwLock<PcpChart>>,
}

impl PcpHandle {
    pub fn read<R>(&self, f: impl FnOnce(&PcpChart) -> R) -> R {
        f(&self.chart.read())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut PcpChart) -> R) -> R {
        f(&mut self.chart.write())
    }

    /// Swaps in a freshly loaded chart.
    pub fn replace(&self, chart: PcpChart) {
        *self.chart.write() = chart;
    }
}

/// Paints curves, axes and the density slider, and routes pointer input to
/// the chart's drag and density handlers.
pub struct PcpView {
    chart: Arc<RwLock<PcpChart>>,
    theme: ChartTheme,
    input: PcpInputHandler,
    bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl PcpView {
    pub fn new(chart: PcpChart) -> Self {
        Self {
            chart: Arc::new(RwLock::new(chart)),
            theme: ChartTheme::default(),
            input: PcpInputHandler::default(),
            bounds: Rc::new(RefCell::new(Bounds::default())),
        }
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn handle(&self) -> PcpHandle {
        PcpHandle {
            chart: Arc::clone(&self.chart),
        }
    }

    fn local(&self, position: Point<Pixels>) -> (f32, f32) {
        let origin = self.bounds.borrow().origin;
        (
            f32::from(position.x - origin.x),
            f32::from(position.y - origin.y),
        )
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let (x, y) = self.local(ev.position);
        let mut chart = self.chart.write();
        if self.input.pointer_down(&mut chart, x, y) {
            cx.notify();
        }
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        if !self.input.is_captured() {
            return;
        }
        // Button released outside the view: end the gesture.
        if ev.pressed_button != Some(MouseButton::Left) {
            let mut chart = self.chart.write();
            self.input.pointer_up(&mut chart);
            cx.notify();
            return;
        }
        let (x, _) = self.local(ev.position);
        let mut chart = self.chart.write();
        if self.input.pointer_move(&mut chart, x) {
            cx.notify();
        }
    }

    fn on_mouse_up(&mut self, _ev: &MouseUpEvent, cx: &mut Context<Self>) {
        let mut chart = self.chart.write();
        if self.input.pointer_up(&mut chart) {
            cx.notify();
        }
    }
}

impl Render for PcpView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let chart = Arc::clone(&self.chart);
        let bounds_cell = Rc::clone(&self.bounds);
        let theme = self.theme.clone();
        let background = to_hsla(theme.background);

        div()
            .size_full()
            .bg(background)
            .child(
                canvas(
                    move |bounds, _window, _cx| {
                        *bounds_cell.borrow_mut() = bounds;
                        chart.read().frame()
                    },
                    move |bounds, frame, window, cx| {
                        paint_frame(&frame, bounds, &theme, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev: &MouseDownEvent, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev: &MouseMoveEvent, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev: &MouseUpEvent, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
    }
}

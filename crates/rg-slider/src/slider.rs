//! Slider widget lifecycle and pointer handling
//!
//! A slider goes through three phases:
//! - **attached** (pending): listeners are registered and pointer input is live,
//!   but no value has been published yet
//! - **ready**: the host's first layout pass is done; metrics are measured and
//!   the initial value is published
//! - **detached**: the document listeners are gone and the widget ignores input
//!
//! State is shared between the [`Slider`] handle and its listener closures
//! through `Rc<RefCell<_>>`; everything runs on the thread that dispatches
//! events into the [`Document`]. The widget keeps the ids of its elements and
//! looks them up on every event, so other markup may come and go around it.
//! Values are published after the state borrow ends, so bound value observers
//! can read the slider.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use rg_dom::{
    element_at, element_at_mut, find_first_by_class, path_of_id, Document, Element, ElementId,
    ElementPath, EventKind, ListenerHandle, ListenerTarget, PointerEvent,
};

use crate::binding::BoundValue;
use crate::config::SliderConfig;
use crate::error::ConfigurationError;
use crate::navigator::Navigator;
use crate::position::{expected_placement, TrackMetrics};

/// How long hosts should let their first layout settle before calling [`Slider::ready`]
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Lifecycle phase of a [`Slider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Ready,
    Detached,
}

#[derive(Debug)]
struct SliderState {
    navigator: Navigator,
    handle_id: ElementId,
    track_id: ElementId,
    root_id: ElementId,
    /// Viewport left of the widget root
    origin_left: f32,
    handle_width: f32,
    list_item_width: f32,
    /// Pointer x relative to `origin_left`
    cur_x: f32,
    tracking: bool,
    current_value: Option<i64>,
    position: f64,
    phase: Phase,
    bound: BoundValue,
}

impl SliderState {
    fn measure(&mut self, root: &Element) {
        self.origin_left = find_by_id(root, &self.root_id)
            .map(Element::viewport_left)
            .unwrap_or(0.0);
        self.handle_width = find_by_id(root, &self.handle_id)
            .map(Element::client_width)
            .unwrap_or(0.0);
        let track_width = self.track_width(root);
        self.list_item_width = self.navigator.marker_width(track_width);
    }

    fn track_width(&self, root: &Element) -> f32 {
        find_by_id(root, &self.track_id)
            .map(Element::client_width)
            .unwrap_or(0.0)
    }

    fn on_press(&mut self) {
        if self.phase == Phase::Detached {
            return;
        }
        self.tracking = true;
    }

    fn on_release(&mut self) {
        self.tracking = false;
    }

    /// Returns the value to publish, if the handle moved
    fn on_move(&mut self, x: f32, root: &mut Element) -> Option<i64> {
        if self.phase == Phase::Detached {
            return None;
        }
        self.cur_x = x - self.origin_left;
        self.tracking.then(|| self.slide(root))
    }

    fn on_click(&mut self, x: f32, root: &mut Element) -> Option<i64> {
        if self.phase == Phase::Detached {
            return None;
        }
        self.cur_x = x - self.origin_left;
        Some(self.slide(root))
    }

    /// Move the handle to the current pointer and return the new value
    fn slide(&mut self, root: &mut Element) -> i64 {
        let metrics = TrackMetrics::new(self.handle_width, self.track_width(root));
        let placement = expected_placement(self.cur_x, &metrics, &self.navigator);

        if let Some(path) = path_of_id(root, &self.handle_id) {
            if let Some(handle) = element_at_mut(root, &path) {
                handle.left_percent = Some(placement.left_percent as f32);
            }
        }
        self.position = placement.left_percent;
        self.current_value = Some(placement.value);

        log::debug!(
            "slider moved to {:.2}% with value {}",
            placement.left_percent,
            placement.value
        );
        placement.value
    }
}

fn find_by_id<'a>(root: &'a Element, id: &ElementId) -> Option<&'a Element> {
    path_of_id(root, id).and_then(|path| element_at(root, &path))
}

/// Write `value` into the bound value once no borrow of `state` is held
fn publish(state: &RefCell<SliderState>, value: Option<i64>) {
    let Some(value) = value else {
        return;
    };
    let bound = state.borrow().bound.clone();
    bound.set(value);
}

/// A range slider attached to markup inside a [`Document`]
///
/// Created with [`Slider::attach`]. The host calls [`Slider::ready`] once after
/// its first layout pass and [`Slider::detach`] when the widget goes away.
#[derive(Debug)]
pub struct Slider {
    state: Rc<RefCell<SliderState>>,
    document_listeners: Vec<ListenerHandle>,
}

impl Slider {
    /// Attach a slider to the markup rooted at `root`
    ///
    /// Locates the handle (`config.tracker_class`) and the track bar
    /// (`config.track_bar_class`) as the first pre-order descendants with
    /// those classes, derives the navigation list, and registers:
    /// - a press listener on the handle
    /// - a click listener on the widget root
    /// - move and release listeners on the document
    ///
    /// Nothing is published until [`Slider::ready`].
    pub fn attach(
        document: &mut Document,
        root: ElementPath,
        config: SliderConfig,
        bound: BoundValue,
    ) -> Result<Self, ConfigurationError> {
        let navigator = Navigator::from_config(&config)?;

        let missing_root = || ConfigurationError::MissingElement {
            class: "(slider root)".to_string(),
        };
        let root_id = document.element_id(&root).ok_or_else(missing_root)?;
        let widget_root = element_at(document.root(), &root).ok_or_else(missing_root)?;
        let locate = |class: &str| {
            find_first_by_class(widget_root, class)
                .and_then(|element| element.id().cloned())
                .ok_or_else(|| ConfigurationError::MissingElement {
                    class: class.to_string(),
                })
        };
        let handle_id = locate(&config.tracker_class)?;
        let track_id = locate(&config.track_bar_class)?;

        let mut state = SliderState {
            navigator,
            handle_id: handle_id.clone(),
            track_id,
            root_id: root_id.clone(),
            origin_left: 0.0,
            handle_width: 0.0,
            list_item_width: 0.0,
            cur_x: 0.0,
            tracking: false,
            current_value: None,
            position: 0.0,
            phase: Phase::Pending,
            bound,
        };
        state.measure(document.root());
        log::debug!(
            "attaching slider: handle {}, track {}, {} steps",
            state.handle_id,
            state.track_id,
            state.navigator.total_steps()
        );

        let state = Rc::new(RefCell::new(state));

        // Element listeners live as long as their elements
        {
            let state = Rc::clone(&state);
            document.add_listener(
                ListenerTarget::Element(handle_id),
                EventKind::Press,
                move |_, _| state.borrow_mut().on_press(),
            );
        }
        {
            let state = Rc::clone(&state);
            document.add_listener(
                ListenerTarget::Element(root_id),
                EventKind::Click,
                move |event, markup| {
                    let value = state.borrow_mut().on_click(event.position().x, markup);
                    publish(&state, value);
                },
            );
        }

        let release = {
            let state = Rc::clone(&state);
            document.add_listener(ListenerTarget::Document, EventKind::Release, move |_, _| {
                state.borrow_mut().on_release()
            })
        };
        let movement = {
            let state = Rc::clone(&state);
            document.add_listener(
                ListenerTarget::Document,
                EventKind::Move,
                move |event, markup| {
                    let value = state.borrow_mut().on_move(event.position().x, markup);
                    publish(&state, value);
                },
            )
        };

        Ok(Self {
            state,
            document_listeners: vec![release, movement],
        })
    }

    /// Finish initialization after the host's first layout pass
    ///
    /// Re-measures the markup and publishes the first navigation entry (0 when
    /// continuous). Returns `false` if the slider was already ready or detached.
    pub fn ready(&self, document: &Document) -> bool {
        let value = {
            let mut state = self.state.borrow_mut();
            if state.phase != Phase::Pending {
                log::debug!("slider ready requested in phase {:?}, ignoring", state.phase);
                return false;
            }

            state.measure(document.root());
            state.phase = Phase::Ready;
            let value = state.navigator.initial_value();
            state.current_value = Some(value);
            log::debug!("slider ready with value {}", value);
            value
        };
        publish(&self.state, Some(value));
        true
    }

    /// Re-measure the widget origin and handle width after a relayout
    pub fn refresh_metrics(&self, document: &Document) {
        self.state.borrow_mut().measure(document.root());
    }

    /// Remove this slider's document listeners
    ///
    /// Listeners on the handle and the widget root stay registered until their
    /// elements are removed from the document, but no longer react.
    pub fn detach(&mut self, document: &mut Document) {
        for handle in self.document_listeners.drain(..) {
            document.remove_listener(handle);
        }
        let mut state = self.state.borrow_mut();
        state.phase = Phase::Detached;
        state.tracking = false;
        log::debug!("slider detached");
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    /// Last computed value, `None` before the first publish
    pub fn value(&self) -> Option<i64> {
        self.state.borrow().current_value
    }

    /// Handle `left` in percent of the track width
    pub fn position_percent(&self) -> f64 {
        self.state.borrow().position
    }

    /// Whether the handle is being dragged
    pub fn is_tracking(&self) -> bool {
        self.state.borrow().tracking
    }

    pub fn navigator(&self) -> Navigator {
        self.state.borrow().navigator.clone()
    }

    /// Pixel width of one navigator marker
    pub fn list_item_width(&self) -> f32 {
        self.state.borrow().list_item_width
    }

    /// Id of the draggable handle element
    pub fn handle_id(&self) -> ElementId {
        self.state.borrow().handle_id.clone()
    }

    pub fn track_id(&self) -> ElementId {
        self.state.borrow().track_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{slider_markup, SliderStyle};
    use rg_dom::{Offset, Point, Rect};

    const VIEWPORT: Rect = Rect::new([0.0, 0.0], [800.0, 600.0]);

    /// Default markup at x = 100: track 300px wide, handle 20px wide
    fn setup(config: SliderConfig) -> (Document, Slider, BoundValue) {
        let markup = slider_markup(&config, &SliderStyle::default())
            .unwrap()
            .with_offset(Offset::new(100.0, 50.0));
        let mut document = Document::new(markup);
        document.compute_layout(VIEWPORT);

        let bound = BoundValue::new();
        let slider =
            Slider::attach(&mut document, ElementPath::root(), config, bound.clone()).unwrap();
        (document, slider, bound)
    }

    fn at(x: f32) -> Point {
        Point::new(x, 55.0)
    }

    fn press(doc: &mut Document, x: f32) {
        doc.dispatch(&PointerEvent::Press { position: at(x) });
    }

    fn drag_to(doc: &mut Document, x: f32) {
        doc.dispatch(&PointerEvent::Move { position: at(x) });
    }

    fn release(doc: &mut Document, x: f32) {
        doc.dispatch(&PointerEvent::Release { position: at(x) });
    }

    fn click(doc: &mut Document, x: f32) {
        doc.dispatch(&PointerEvent::Click { position: at(x) });
    }

    fn handle_left(doc: &Document, slider: &Slider) -> Option<f32> {
        find_by_id(doc.root(), &slider.handle_id()).and_then(|h| h.left_percent)
    }

    #[test]
    fn test_step_scenario_publishes_first_entry_when_ready() {
        let (document, slider, bound) = setup(SliderConfig::default().with_step(10));

        assert_eq!(slider.navigator().list(), (1..=9i64).collect::<Vec<_>>().as_slice());
        assert_eq!(slider.phase(), Phase::Pending);
        assert_eq!(bound.get(), None);

        assert!(slider.ready(&document));
        assert_eq!(bound.get(), Some(1));
        assert_eq!(slider.value(), Some(1));
        assert_eq!(slider.phase(), Phase::Ready);

        assert!(!slider.ready(&document));
        assert_eq!(bound.writes(), 1);
    }

    #[test]
    fn test_continuous_ready_publishes_zero() {
        let (document, slider, bound) = setup(SliderConfig::default());
        slider.ready(&document);
        assert_eq!(bound.get(), Some(0));
        assert_eq!(slider.list_item_width(), 0.0);
    }

    #[test]
    fn test_range_scenario() {
        let (_, slider, _) = setup(
            SliderConfig::default()
                .with_navigator_range(5, 8)
                .with_show_navigator(true),
        );
        let navigator = slider.navigator();
        assert_eq!(navigator.total_steps(), 3);
        assert_eq!(navigator.list(), &[5, 6, 7]);
        assert_eq!(navigator.reachable_values(), vec![5, 6, 7, 8]);
        assert_eq!(slider.list_item_width(), 100.0);
    }

    #[test]
    fn test_configuration_errors() {
        let markup = slider_markup(&SliderConfig::default(), &SliderStyle::default()).unwrap();
        let mut document = Document::new(markup);
        let mut attach = |config: SliderConfig| {
            Slider::attach(&mut document, ElementPath::root(), config, BoundValue::new())
                .unwrap_err()
        };

        assert_eq!(
            attach(SliderConfig::default().with_navigator_range(8, 5)),
            ConfigurationError::InvalidRange { from: 8, to: 5 }
        );
        assert_eq!(
            attach(SliderConfig {
                step: Some(10),
                navigator_from: Some(2),
                ..Default::default()
            }),
            ConfigurationError::MutuallyExclusiveOptions
        );
        assert_eq!(
            attach(SliderConfig::default().with_tracker_class("nope")),
            ConfigurationError::MissingElement {
                class: "nope".to_string()
            }
        );
        assert_eq!(
            attach(SliderConfig::default().with_step(1_000_000_000)),
            ConfigurationError::TooManySteps {
                max: crate::navigator::MAX_STEPS
            }
        );

        // Failed attaches leave nothing behind
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_drag_moves_handle_and_publishes() {
        let (mut document, slider, bound) = setup(SliderConfig::default());
        slider.ready(&document);

        // Moving without a press does nothing
        drag_to(&mut document, 250.0);
        assert_eq!(bound.writes(), 1);

        // Handle sits at 100..120
        press(&mut document, 105.0);
        assert!(slider.is_tracking());

        // 100 * (250 - 100 - 20) / 300 = 43.33%
        drag_to(&mut document, 250.0);
        assert_eq!(bound.get(), Some(43));
        let left = handle_left(&document, &slider).unwrap();
        assert!((left - 43.333).abs() < 0.01, "{left}");

        release(&mut document, 250.0);
        assert!(!slider.is_tracking());
        drag_to(&mut document, 300.0);
        assert_eq!(bound.get(), Some(43));
    }

    #[test]
    fn test_release_anywhere_stops_tracking() {
        let (mut document, slider, _) = setup(SliderConfig::default());
        press(&mut document, 105.0);
        release(&mut document, 790.0);
        assert!(!slider.is_tracking());
    }

    #[test]
    fn test_press_outside_handle_does_not_track() {
        let (mut document, slider, _) = setup(SliderConfig::default());
        press(&mut document, 300.0);
        assert!(!slider.is_tracking());
    }

    #[test]
    fn test_click_jumps_without_press() {
        let (mut document, slider, bound) = setup(SliderConfig::default().with_step(5));
        slider.ready(&document);

        // 100 * (300 - 100 - 20) / 300 = 60% -> 4 steps of 25% -> 50%, value 3
        click(&mut document, 300.0);
        assert_eq!(bound.get(), Some(3));
        assert_eq!(slider.position_percent(), 50.0);
        assert_eq!(handle_left(&document, &slider), Some(50.0));
    }

    #[test]
    fn test_click_is_idempotent() {
        let (mut document, _slider, bound) = setup(SliderConfig::default().with_step(10));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bound.subscribe(move |value| sink.borrow_mut().push(value));

        click(&mut document, 260.0);
        click(&mut document, 260.0);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
    }

    #[test]
    fn test_final_step_publishes_previous_entry_plus_one() {
        let (mut document, slider, bound) = setup(SliderConfig::default().with_step(5));
        let navigator = slider.navigator();

        // Exactly at the end of the track: 100 * (420 - 100 - 20) / 300 = 100%
        press(&mut document, 105.0);
        drag_to(&mut document, 420.0);
        let list = navigator.list();
        assert_eq!(bound.get(), Some(list[list.len() - 1] + 1));
        assert_eq!(bound.get(), Some(5));

        // Handle stays inside the track
        let max = TrackMetrics::new(20.0, 300.0).max_available_percent();
        assert_eq!(slider.position_percent(), max);
    }

    #[test]
    fn test_stepped_values_are_always_reachable() {
        let (mut document, slider, bound) = setup(
            SliderConfig::default()
                .with_navigator_range(5, 8)
                .with_show_navigator(true),
        );
        let reachable = slider.navigator().reachable_values();
        let max = TrackMetrics::new(20.0, 300.0).max_available_percent();

        press(&mut document, 110.0);
        for x in (0..800).step_by(7) {
            drag_to(&mut document, x as f32);
            let value = bound.get().unwrap();
            assert!(reachable.contains(&value), "x={x} -> {value}");
            assert!((0.0..=max).contains(&slider.position_percent()));
        }
    }

    #[test]
    fn test_detach_stops_document_events() {
        let (mut document, mut slider, bound) = setup(SliderConfig::default());
        slider.ready(&document);
        press(&mut document, 105.0);
        assert_eq!(document.document_listener_count(), 2);

        slider.detach(&mut document);
        assert_eq!(slider.phase(), Phase::Detached);
        assert_eq!(document.document_listener_count(), 0);

        let writes = bound.writes();
        let value = slider.value();
        drag_to(&mut document, 300.0);
        release(&mut document, 300.0);
        click(&mut document, 300.0);

        assert_eq!(bound.writes(), writes);
        assert_eq!(slider.value(), value);
        assert!(!slider.ready(&document));
    }

    #[test]
    fn test_detach_leaves_other_sliders_alone() {
        let config = SliderConfig::default();
        let markup = Element::new("body")
            .with_child(slider_markup(&config, &SliderStyle::default()).unwrap())
            .with_child(
                slider_markup(&config, &SliderStyle::default())
                    .unwrap()
                    .with_offset(Offset::new(0.0, 100.0)),
            );
        let mut document = Document::new(markup);
        document.compute_layout(VIEWPORT);

        let first_bound = BoundValue::new();
        let second_bound = BoundValue::new();
        let mut first = Slider::attach(
            &mut document,
            ElementPath::new(vec![0]),
            config.clone(),
            first_bound.clone(),
        )
        .unwrap();
        let second = Slider::attach(
            &mut document,
            ElementPath::new(vec![1]),
            config,
            second_bound.clone(),
        )
        .unwrap();
        assert_eq!(document.document_listener_count(), 4);

        first.detach(&mut document);
        assert_eq!(document.document_listener_count(), 2);

        // Second slider is stacked 100px below the first
        document.dispatch(&PointerEvent::Press {
            position: Point::new(5.0, 105.0),
        });
        assert!(second.is_tracking());
        document.dispatch(&PointerEvent::Move {
            position: Point::new(170.0, 105.0),
        });
        assert_eq!(second_bound.get(), Some(50));
        assert_eq!(first_bound.get(), None);
    }

    #[test]
    fn test_observers_can_read_the_slider() {
        let (mut document, slider, bound) = setup(SliderConfig::default().with_step(5));
        let slider = Rc::new(slider);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let slider = Rc::clone(&slider);
            let seen = Rc::clone(&seen);
            bound.subscribe(move |value| {
                seen.borrow_mut().push((value, slider.value(), slider.position_percent()));
            });
        }

        slider.ready(&document);
        click(&mut document, 300.0);
        // Handle moved to 50%: 100 + 150 = 250..270
        document.compute_layout(VIEWPORT);
        press(&mut document, 255.0);
        drag_to(&mut document, 420.0);

        let max = TrackMetrics::new(20.0, 300.0).max_available_percent();
        assert_eq!(
            *seen.borrow(),
            vec![
                (1, Some(1), 0.0),
                (3, Some(3), 50.0),
                (5, Some(5), max),
            ]
        );
    }

    #[test]
    fn test_removing_a_sibling_slider_keeps_the_other_working() {
        let config = SliderConfig::default();
        let markup = Element::new("body")
            .with_child(slider_markup(&config, &SliderStyle::default()).unwrap())
            .with_child(
                slider_markup(&config, &SliderStyle::default())
                    .unwrap()
                    .with_offset(Offset::new(0.0, 100.0)),
            );
        let mut document = Document::new(markup);
        document.compute_layout(VIEWPORT);

        let first_path = ElementPath::new(vec![0]);
        let mut first = Slider::attach(
            &mut document,
            first_path.clone(),
            config.clone(),
            BoundValue::new(),
        )
        .unwrap();
        let second_bound = BoundValue::new();
        let second = Slider::attach(
            &mut document,
            ElementPath::new(vec![1]),
            config,
            second_bound.clone(),
        )
        .unwrap();
        second.ready(&document);

        first.detach(&mut document);
        document.remove_element(&first_path).unwrap();
        document.compute_layout(VIEWPORT);
        second.refresh_metrics(&document);
        // Only the second slider's handle press, root click, move and release remain
        assert_eq!(document.listener_count(), 4);

        // The second slider now sits at child index 0, still 100px down
        document.dispatch(&PointerEvent::Press {
            position: Point::new(5.0, 105.0),
        });
        assert!(second.is_tracking());
        document.dispatch(&PointerEvent::Move {
            position: Point::new(170.0, 105.0),
        });
        assert_eq!(second_bound.get(), Some(50));
        assert_eq!(handle_left(&document, &second), Some(50.0));

        // Markup appended later gets an id of its own
        document.root_mut().children.push(Element::new("div"));
        let appended = document.element_id(&ElementPath::new(vec![1])).unwrap();
        assert_ne!(appended, second.handle_id());
        assert_ne!(appended, second.track_id());
    }

    #[test]
    fn test_handle_is_first_pre_order_match() {
        // A decoy handle nested deeper in an earlier subtree wins over a later shallow one
        let config = SliderConfig::default();
        let decoy = {
            let mut decoy = Element::new("span")
                .with_class(config.tracker_class.as_str())
                .with_size(10.0, 10.0);
            decoy.left_percent = Some(0.0);
            decoy
        };
        let markup = Element::new("div")
            .with_size(300.0, 40.0)
            .with_child(
                Element::new("div")
                    .with_class(config.track_bar_class.as_str())
                    .with_size(300.0, 20.0)
                    .with_child(Element::new("div").with_child(decoy)),
            )
            .with_child(
                Element::new("span")
                    .with_class(config.tracker_class.as_str())
                    .with_size(20.0, 20.0),
            );
        let mut document = Document::new(markup);
        document.compute_layout(VIEWPORT);

        let slider =
            Slider::attach(&mut document, ElementPath::root(), config, BoundValue::new()).unwrap();
        assert_eq!(
            path_of_id(document.root(), &slider.handle_id()),
            Some(ElementPath::new(vec![0, 0, 0]))
        );
        assert_eq!(
            path_of_id(document.root(), &slider.track_id()),
            Some(ElementPath::new(vec![0]))
        );
    }

    #[test]
    fn test_zero_width_track_clamps_to_start() {
        let config = SliderConfig::default().with_step(5);
        let style = SliderStyle {
            track_width: 0.0,
            ..Default::default()
        };
        let mut document = Document::new(slider_markup(&config, &style).unwrap());
        document.compute_layout(VIEWPORT);
        let slider =
            Slider::attach(&mut document, ElementPath::root(), config, BoundValue::new()).unwrap();

        slider.state.borrow_mut().cur_x = 50.0;
        let value = slider.state.borrow_mut().slide(document.root_mut());
        assert_eq!(value, 1);
        assert_eq!(slider.position_percent(), 0.0);
    }

    #[test]
    fn test_refresh_metrics_follows_relayout() {
        let (mut document, slider, bound) = setup(SliderConfig::default());
        document.root_mut().offset = Offset::new(200.0, 50.0);
        document.compute_layout(VIEWPORT);
        slider.refresh_metrics(&document);

        // Widget now starts at 200: 100 * (350 - 200 - 20) / 300 = 43.33%
        click(&mut document, 350.0);
        assert_eq!(bound.get(), Some(43));
    }
}

// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle tests for `ListView`: attach, resize, scroll, render, teardown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sightline_host::{ListView, ResizePolicy, ViewportHost};
use sightline_window::WindowConfig;

#[derive(Clone, Debug, PartialEq)]
enum HostEvent {
    Measured(f64),
    Registered(u32),
    Unregistered(u32),
}

/// A scroll container whose height and event log are shared with the test.
#[derive(Clone, Debug, Default)]
struct FakePane {
    height: Rc<Cell<f64>>,
    log: Rc<RefCell<Vec<HostEvent>>>,
    next_id: Rc<Cell<u32>>,
}

impl FakePane {
    fn with_height(height: f64) -> Self {
        let pane = Self::default();
        pane.height.set(height);
        pane
    }

    fn events(&self) -> Vec<HostEvent> {
        self.log.borrow().clone()
    }

    fn measurements(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|e| matches!(e, HostEvent::Measured(_)))
            .count()
    }
}

impl ViewportHost for FakePane {
    type Scalar = f64;
    type Registration = u32;

    fn viewport_height(&self) -> f64 {
        let height = self.height.get();
        self.log.borrow_mut().push(HostEvent::Measured(height));
        height
    }

    fn register_resize(&mut self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.log.borrow_mut().push(HostEvent::Registered(id));
        id
    }

    fn unregister_resize(&mut self, registration: u32) {
        self.log
            .borrow_mut()
            .push(HostEvent::Unregistered(registration));
    }
}

type TitleView = ListView<FakePane, fn(&String) -> String>;

fn label(title: &String) -> String {
    format!("<{title}>")
}

fn titles(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("title-{i}")).collect()
}

fn view() -> TitleView {
    let config = WindowConfig::new(60.0).with_overscan(4);
    TitleView::new(config, label).unwrap()
}

#[test]
fn attach_measures_then_registers() {
    let pane = FakePane::with_height(300.0);
    let mut view = view();
    assert!(!view.is_attached());

    assert_eq!(view.attach(pane.clone()), 9);
    assert!(view.is_attached());
    assert_eq!(
        pane.events(),
        vec![HostEvent::Measured(300.0), HostEvent::Registered(1)]
    );
}

#[test]
fn render_positions_rows_absolutely() {
    let items = titles(100);
    let mut view = view();
    view.attach(FakePane::with_height(300.0));
    view.handle_scroll(185.0);

    let frame = view.render(&items);
    assert_eq!(frame.content_height, 6000.0);
    assert_eq!(frame.len(), 9);
    let indices: Vec<usize> = frame.rows.iter().map(|row| row.index).collect();
    assert_eq!(indices, (3..12).collect::<Vec<_>>());
    for row in &frame.rows {
        assert_eq!(row.top, row.index as f64 * 60.0);
        assert_eq!(row.height, 60.0);
        assert_eq!(row.node, format!("<title-{}>", row.index));
    }
    assert_eq!(view.content_height(&items), 6000.0);
}

#[test]
fn immediate_resize_remeasures_and_keeps_scroll() {
    let pane = FakePane::with_height(300.0);
    let mut view = view();
    view.attach(pane.clone());
    view.handle_scroll(185.0);

    pane.height.set(600.0);
    view.handle_resize();

    assert_eq!(view.projector().count(), 14);
    assert_eq!(view.projector().start_index(), 3);
    assert_eq!(pane.measurements(), 2);
}

#[test]
fn coalesced_resizes_measure_once_per_flush() {
    let pane = FakePane::with_height(300.0);
    let mut view = view().with_policy(ResizePolicy::Coalesce);
    view.attach(pane.clone());

    pane.height.set(420.0);
    view.handle_resize();
    pane.height.set(600.0);
    view.handle_resize();
    view.handle_resize();

    assert!(view.is_resize_pending());
    assert_eq!(view.projector().count(), 9);
    assert_eq!(pane.measurements(), 1);

    assert!(view.flush_resize());
    assert!(!view.flush_resize());
    assert_eq!(view.projector().count(), 14);
    assert_eq!(pane.measurements(), 2);
}

#[test]
fn switching_to_immediate_applies_pending_resize() {
    let pane = FakePane::with_height(300.0);
    let mut view = view().with_policy(ResizePolicy::Coalesce);
    view.attach(pane.clone());

    pane.height.set(600.0);
    view.handle_resize();
    view.set_policy(ResizePolicy::Immediate);

    assert!(!view.is_resize_pending());
    assert_eq!(view.projector().count(), 14);
}

#[test]
fn hidden_pane_recovers_on_next_resize() {
    let pane = FakePane::with_height(0.0);
    let mut view = view();
    assert_eq!(view.attach(pane.clone()), 4);
    assert_eq!(view.render(&titles(100)).len(), 4);

    pane.height.set(300.0);
    view.handle_resize();
    assert_eq!(view.render(&titles(100)).len(), 9);
}

#[test]
fn detach_unregisters_and_ignores_later_events() {
    let pane = FakePane::with_height(300.0);
    let mut view = view();
    view.attach(pane.clone());
    view.handle_scroll(120.0);

    let returned = view.detach().expect("view was attached");
    assert_eq!(returned.events().last(), Some(&HostEvent::Unregistered(1)));
    assert!(view.detach().is_none());

    pane.height.set(900.0);
    view.handle_resize();
    assert_eq!(pane.measurements(), 1);
    assert_eq!(view.projector().count(), 9);

    view.handle_scroll(240.0);
    assert_eq!(view.projector().start_index(), 4);
}

#[test]
fn drop_releases_registration() {
    let pane = FakePane::with_height(300.0);
    {
        let mut view = view();
        view.attach(pane.clone());
    }
    assert_eq!(
        pane.events(),
        vec![
            HostEvent::Measured(300.0),
            HostEvent::Registered(1),
            HostEvent::Unregistered(1),
        ]
    );
}

#[test]
fn reattach_replaces_previous_host() {
    let first = FakePane::with_height(300.0);
    let second = FakePane::with_height(600.0);
    let mut view = view();

    view.attach(first.clone());
    view.handle_scroll(185.0);
    assert_eq!(view.attach(second.clone()), 14);

    assert_eq!(first.events().last(), Some(&HostEvent::Unregistered(1)));
    assert_eq!(second.events().last(), Some(&HostEvent::Registered(1)));
    assert_eq!(view.projector().start_index(), 3);
}

#[test]
fn borrowed_hosts_work_through_the_blanket_impl() {
    let mut pane = FakePane::with_height(300.0);
    {
        let mut view: ListView<&mut FakePane, _> =
            ListView::new(WindowConfig::new(60.0), |t: &String| t.len()).unwrap();
        view.attach(&mut pane);
        let frame = view.render(&titles(3));
        assert_eq!(frame.nodes().copied().collect::<Vec<_>>(), vec![7, 7, 7]);
    }
    assert_eq!(pane.events().last(), Some(&HostEvent::Unregistered(1)));
}

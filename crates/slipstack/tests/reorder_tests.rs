//! End-to-end gesture tests against the headless mock DOM.
//!
//! Each test drives a controller with the same event sequences a browser
//! host would deliver (`dragstart` → `dragover`* → `drop`/`dragend`) and
//! asserts on the resulting tree, class marks, and emitted signals.

use std::sync::Arc;

use parking_lot::Mutex;

use slipstack::dom::{BindOp, MockDom};
use slipstack::prelude::*;
use slipstack::{DRAGGING_CLASS, PLACEHOLDER_CLASS};

fn fixture(count: usize) -> (Arc<MockDom>, NodeId, Vec<NodeId>) {
    let dom = Arc::new(MockDom::new());
    let container = dom.create_element("ul");
    let items = (0..count)
        .map(|_| {
            let item = dom.create_element("li");
            dom.append_child(container, item);
            item
        })
        .collect();
    (dom, container, items)
}

fn send(list: &Reorderable, kind: DragEventKind, target: NodeId) -> DragEvent {
    let mut event = DragEvent::new(kind, target);
    list.handle_event(&mut event);
    event
}

fn counter(signal: &Signal<()>) -> Arc<Mutex<usize>> {
    let count = Arc::new(Mutex::new(0));
    let count_clone = count.clone();
    signal.connect(move |_| {
        *count_clone.lock() += 1;
    });
    count
}

fn placeholder_index(dom: &MockDom, container: NodeId) -> Option<usize> {
    dom.children(container)
        .iter()
        .position(|&child| dom.has_class(child, PLACEHOLDER_CLASS))
}

#[test]
fn placeholder_follows_hovered_child_on_correct_side() {
    let (dom, container, items) = fixture(4);
    let list = Reorderable::new(dom.clone(), container).unwrap();
    list.bind().unwrap();

    send(&list, DragEventKind::DragStart, items[0]);

    // First hover: detached placeholder counts as index -1, so it lands
    // after the hovered child.
    send(&list, DragEventKind::DragOver, items[1]);
    assert_eq!(placeholder_index(&dom, container), Some(2));

    // Hover further down: placeholder index 2 < child index 4, after again.
    send(&list, DragEventKind::DragOver, items[3]);
    assert_eq!(placeholder_index(&dom, container), Some(4));

    // Hover back up: placeholder index 4 > child index 1, before the child.
    send(&list, DragEventKind::DragOver, items[1]);
    assert_eq!(placeholder_index(&dom, container), Some(1));
}

#[test]
fn drop_without_dragover_is_a_noop_reorder() {
    let (dom, container, items) = fixture(3);
    let list = Reorderable::new(dom.clone(), container).unwrap();
    list.bind().unwrap();

    let updates = counter(list.updated());
    let drops = Arc::new(Mutex::new(0));
    let drops_clone = drops.clone();
    list.dropped().connect(move |_| {
        *drops_clone.lock() += 1;
    });

    send(&list, DragEventKind::DragStart, items[1]);
    send(&list, DragEventKind::Drop, items[1]);

    assert_eq!(dom.children(container), items);
    assert_eq!(*updates.lock(), 0);
    assert_eq!(*drops.lock(), 1);
    assert_eq!(list.phase(), DragPhase::Idle);
}

#[test]
fn dragging_first_item_past_third_yields_one_update() {
    let (dom, container, items) = fixture(3);
    let list = Reorderable::new(dom.clone(), container).unwrap();
    list.bind().unwrap();

    let updates = counter(list.updated());

    send(&list, DragEventKind::DragStart, items[0]);
    send(&list, DragEventKind::DragOver, items[2]);
    send(&list, DragEventKind::Drop, items[2]);
    send(&list, DragEventKind::DragEnd, items[0]);

    // [0, 1, 2] -> [1, 2, 0]
    assert_eq!(dom.children(container), vec![items[1], items[2], items[0]]);
    assert_eq!(*updates.lock(), 1);

    // The dragged item is fully restored.
    assert_eq!(dom.display(items[0]), "block");
    assert!(!dom.has_class(items[0], DRAGGING_CLASS));
}

#[test]
fn reorder_back_to_original_slot_emits_no_update() {
    let (dom, container, items) = fixture(3);
    let list = Reorderable::new(dom.clone(), container).unwrap();
    list.bind().unwrap();

    let updates = counter(list.updated());

    send(&list, DragEventKind::DragStart, items[0]);
    // Wander down and back: the placeholder ends just before item 1, which
    // is the dragged item's original slot.
    send(&list, DragEventKind::DragOver, items[1]);
    send(&list, DragEventKind::DragOver, items[1]);
    send(&list, DragEventKind::Drop, items[1]);

    assert_eq!(dom.children(container), items);
    assert_eq!(*updates.lock(), 0);
}

#[test]
fn cancelled_gesture_removes_preview_without_moving_items() {
    let (dom, container, items) = fixture(3);
    let list = Reorderable::new(dom.clone(), container).unwrap();
    list.bind().unwrap();

    let updates = counter(list.updated());

    send(&list, DragEventKind::DragStart, items[0]);
    send(&list, DragEventKind::DragOver, items[2]);
    assert!(placeholder_index(&dom, container).is_some());

    // Gesture abandoned (Escape / drop outside): only dragend fires.
    send(&list, DragEventKind::DragEnd, items[0]);

    assert_eq!(placeholder_index(&dom, container), None);
    assert_eq!(dom.children(container), items);
    assert_eq!(*updates.lock(), 0);
    assert_eq!(list.phase(), DragPhase::Idle);
}

#[test]
fn ignored_children_neither_start_drags_nor_attract_the_placeholder() {
    let (dom, container, items) = fixture(4);
    dom.add_class(items[2], "pinned");

    let list = Reorderable::new(dom.clone(), container).unwrap();
    list.bind().unwrap();
    list.ignore(".pinned").unwrap();

    // A drag originating from the ignored child is cancelled.
    let starts = Arc::new(Mutex::new(0));
    let starts_clone = starts.clone();
    list.started().connect(move |_| {
        *starts_clone.lock() += 1;
    });
    let event = send(&list, DragEventKind::DragStart, items[2]);
    assert!(event.is_default_prevented());
    assert_eq!(*starts.lock(), 0);

    // Hovering the ignored child leaves the placeholder where it was.
    send(&list, DragEventKind::DragStart, items[0]);
    assert_eq!(*starts.lock(), 1);
    send(&list, DragEventKind::DragOver, items[1]);
    let parked = placeholder_index(&dom, container);
    send(&list, DragEventKind::DragOver, items[2]);
    assert_eq!(placeholder_index(&dom, container), parked);
}

#[test]
fn handle_filter_gates_drag_initiation() {
    let (dom, container, items) = fixture(2);
    let grip = dom.create_element("span");
    dom.add_class(grip, "grip");
    dom.append_child(items[1], grip);

    let list = Reorderable::new(dom.clone(), container).unwrap();
    list.bind().unwrap();
    list.handle(".grip").unwrap();

    let starts = Arc::new(Mutex::new(0));
    let starts_clone = starts.clone();
    list.started().connect(move |_| {
        *starts_clone.lock() += 1;
    });

    // Pressed outside the handle: dragstart cancelled, no start event.
    send(&list, DragEventKind::MouseDown, items[1]);
    let event = send(&list, DragEventKind::DragStart, items[1]);
    assert!(event.is_default_prevented());
    assert_eq!(*starts.lock(), 0);

    // Pressed on the handle: the gesture proceeds normally.
    send(&list, DragEventKind::MouseDown, grip);
    let event = send(&list, DragEventKind::DragStart, items[1]);
    assert!(!event.is_default_prevented());
    assert_eq!(*starts.lock(), 1);
    assert_eq!(list.phase(), DragPhase::Dragging);
}

#[test]
fn bind_unbind_round_trip_leaves_nothing_registered() {
    let (dom, container, items) = fixture(3);
    let list = Reorderable::new(dom.clone(), container).unwrap();
    list.bind().unwrap();
    list.unbind();

    for &item in &items {
        assert!(!dom.is_draggable(item));
    }

    // Every bound listener was unbound, on the container, in order.
    let calls = dom.bind_calls();
    let bound: Vec<_> = calls
        .iter()
        .filter(|call| call.op == BindOp::Bind)
        .map(|call| (call.target, call.event))
        .collect();
    let unbound: Vec<_> = calls
        .iter()
        .filter(|call| call.op == BindOp::Unbind)
        .map(|call| (call.target, call.event))
        .collect();
    assert_eq!(bound, unbound);
    assert_eq!(bound.len(), DragEventKind::ALL.len());
    assert!(bound.iter().all(|&(target, _)| target == container));
}

#[test]
fn connected_containers_transfer_the_dragged_item() {
    let dom = Arc::new(MockDom::new());
    let build = |tags: usize| {
        let container = dom.create_element("ul");
        let items: Vec<NodeId> = (0..tags)
            .map(|_| {
                let item = dom.create_element("li");
                dom.append_child(container, item);
                item
            })
            .collect();
        (container, items)
    };
    let (container_a, items_a) = build(2);
    let (container_b, items_b) = build(2);

    let origin = Reorderable::new(dom.clone(), container_a).unwrap();
    let destination = Reorderable::new(dom.clone(), container_b).unwrap();
    origin.bind().unwrap();
    destination.bind().unwrap();

    // Chaining returns the passed controller.
    let chained = destination.connect(&origin);
    assert_eq!(chained.container(), origin.container());

    // Drag starts in the origin container...
    send(&origin, DragEventKind::DragStart, items_a[0]);
    assert_eq!(destination.phase(), DragPhase::Dragging);

    // ...moves over the destination...
    send(&destination, DragEventKind::DragOver, items_b[0]);
    assert_eq!(placeholder_index(&dom, container_b), Some(1));

    // ...and drops there.
    let event = send(&destination, DragEventKind::Drop, items_b[0]);
    assert!(event.is_propagation_stopped());

    assert_eq!(dom.children(container_a), vec![items_a[1]]);
    assert_eq!(
        dom.children(container_b),
        vec![items_b[0], items_a[0], items_b[1]]
    );

    // The origin's transient state was reset by the drop.
    assert_eq!(origin.phase(), DragPhase::Idle);
    assert_eq!(destination.phase(), DragPhase::Idle);

    // The origin's trailing dragend is a harmless no-op.
    send(&origin, DragEventKind::DragEnd, items_a[0]);
    assert_eq!(dom.children(container_a), vec![items_a[1]]);
}

#[test]
fn started_once_subscription_fires_a_single_time() {
    let (dom, container, items) = fixture(2);
    let list = Reorderable::new(dom.clone(), container).unwrap();
    list.bind().unwrap();

    let starts = Arc::new(Mutex::new(0));
    let starts_clone = starts.clone();
    list.started().connect_once(move |_| {
        *starts_clone.lock() += 1;
    });

    send(&list, DragEventKind::DragStart, items[0]);
    send(&list, DragEventKind::DragEnd, items[0]);
    send(&list, DragEventKind::DragStart, items[1]);

    assert_eq!(*starts.lock(), 1);
}

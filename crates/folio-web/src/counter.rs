use crate::dom;
use folio_core::constants::{classes, selectors};
use folio_core::{Counter, CounterConfig, DecorConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Stat {
    container: web::Element,
    value: web::Element,
    counter: Rc<RefCell<Counter>>,
}

fn run_counter(stat: &Stat, tick_ms: u32) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let counter = stat.counter.clone();
    let value = stat.value.clone();
    let handle_tick = handle.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(tick) = counter.borrow_mut().tick() else {
            return;
        };
        value.set_text_content(Some(&tick.display.to_string()));
        if tick.finished {
            if let (Some(w), Some(id)) = (web::window(), handle_tick.take()) {
                w.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);

    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            tick_ms as i32,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    handle.set(Some(id));
    closure.forget();
    Ok(())
}

fn start_stat(stat: &Stat, config: &CounterConfig) {
    if stat.container.class_list().contains(classes::ANIMATED) {
        return;
    }
    if !stat.counter.borrow_mut().start() {
        return;
    }
    dom::add_class(&stat.container, classes::ANIMATED);
    if let Err(e) = run_counter(stat, config.tick_ms) {
        log::error!("[counter] {:?}", e);
    }
}

/// Stat values count up from zero the first time they are half on screen.
pub fn wire(
    _window: &web::Window,
    document: &web::Document,
    config: &DecorConfig,
) -> anyhow::Result<usize> {
    let mut stats = Vec::new();
    for container in dom::query_all(document, selectors::STAT) {
        let Ok(Some(value)) = container.query_selector(selectors::STAT_VALUE) else {
            continue;
        };
        let text = value.text_content().unwrap_or_default();
        let Some(counter) = Counter::from_text(&text, &config.counter) else {
            continue;
        };
        stats.push(Stat {
            container: container.into(),
            value,
            counter: Rc::new(RefCell::new(counter)),
        });
    }
    if stats.is_empty() {
        return Ok(0);
    }

    let stats = Rc::new(stats);
    let counter_cfg = config.counter;
    let observed = stats.clone();
    let observer = dom::intersection_observer(counter_cfg.threshold, None, move |entry, _| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        if let Some(stat) = observed.iter().find(|s| s.container == target) {
            start_stat(stat, &counter_cfg);
        }
    })?;
    for stat in stats.iter() {
        observer.observe(&stat.container);
    }
    Ok(stats.len())
}

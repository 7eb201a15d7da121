// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loads a catalog through the response client and scrolls a list view over
//! it, printing each frame.
//!
//! Run with `RUST_LOG=sightline_window=trace,sightline_host=debug` to see
//! measurement and scroll events. Set
//! `SIGHTLINE_CONFIG='{"row_height": 40, "overscan": 2}'` to change the window.

use serde_json::json;
use sightline_demos::{Pane, SearchResult, catalog_host, load_config};
use sightline_host::{Frame, ListView, ResizePolicy};
use sightline_response::Client;
use sightline_window::WindowConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn print_frame(label: &str, frame: &Frame<String>) {
    println!(
        "-- {label}: {} rows, content {}px",
        frame.len(),
        frame.content_height
    );
    for row in &frame.rows {
        println!("{:>8.1}  {}", row.top, row.node);
    }
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid window config, using defaults");
            WindowConfig::default()
        }
    };

    let mut client = Client::new(catalog_host(500));
    let query = json!({ "keyword": "Dark" });
    let results: Vec<SearchResult> = match client.request("search", &query) {
        Ok(results) => results,
        Err(err) => {
            error!(code = ?err.code(), "{}", err.user_message());
            return;
        }
    };
    info!(len = results.len(), "catalog loaded");

    if let Err(err) = client.request_without_args::<Vec<SearchResult>>("favorites") {
        println!("favorites unavailable: {}", err.user_message());
    }

    let label = |r: &SearchResult| format!("[{}] {}", r.channel, r.name);
    let mut view = match ListView::<Pane, _>::new(config, label) {
        Ok(view) => view.with_policy(ResizePolicy::Coalesce),
        Err(err) => {
            error!(%err, "window config rejected");
            return;
        }
    };

    let pane = Pane::new(300.0);
    view.attach(pane.clone());
    print_frame("top", &view.render(&results));

    view.handle_scroll(1_234.0);
    print_frame("scrolled", &view.render(&results));

    // Drag the window taller in a few steps; only the last height counts.
    for height in [360.0, 420.0, 480.0] {
        if pane.resize(height) {
            view.handle_resize();
        }
    }
    view.flush_resize();
    print_frame("resized", &view.render(&results));

    view.handle_scroll(f64::from(u16::MAX) * 60.0);
    print_frame("past the end", &view.render(&results));

    drop(view);
    assert!(!pane.is_listening(), "dropping the view releases the pane");
}

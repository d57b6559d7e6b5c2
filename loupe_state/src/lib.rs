// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe State: tagged state values and partial-update merging.
//!
//! Viewer state (playback options, overlay visibility, per-label colors, ...)
//! is updated by sending partial patches rather than whole new states. This
//! crate defines that merge contract once, over an explicit tagged value:
//!
//! - Map + map: merged key by key, recursively. Keys only present in the
//!   patch are added; keys only in the base are kept.
//! - Anything else, including list + list: the patch replaces the base
//!   wholesale.
//! - [`StateValue::Null`] in a patch is an explicit overwrite, not "absent".
//!
//! ## Minimal example
//!
//! ```rust
//! use loupe_state::StateValue;
//!
//! let mut state = StateValue::map([
//!     ("options", StateValue::map([("loop", true.into()), ("fps", 30.0.into())])),
//!     ("labels", StateValue::List(vec!["car".into(), "person".into()])),
//! ]);
//!
//! state.merge_from(StateValue::map([
//!     ("options", StateValue::map([("fps", 24.0.into())])),
//!     ("labels", StateValue::List(vec!["truck".into()])),
//! ]));
//!
//! assert_eq!(state.get_path(&["options", "loop"]), Some(&StateValue::Bool(true)));
//! assert_eq!(state.get_path(&["options", "fps"]).and_then(StateValue::as_f64), Some(24.0));
//! assert_eq!(state.get("labels").and_then(StateValue::as_list).map(<[_]>::len), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod value;

pub use value::{StateMap, StateValue, merge};

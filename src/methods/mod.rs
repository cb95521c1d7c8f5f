//! Declarative method schema and the façade namespaces built from it.
//!
//! Every remote operation is one [`Method`] entry: its wire name plus the
//! required and optional parameter keys. The namespaces below are generated
//! from those tables by `namespace!`, so adding an operation is one line.

use serde_json::Value;

use crate::error::{Result, XbmcError};

mod params;

pub use params::Params;

/// Schema of one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Method {
  pub name: &'static str,
  pub required: &'static [&'static str],
  pub optional: &'static [&'static str],
}

impl Method {
  pub const fn new(
    name: &'static str,
    required: &'static [&'static str],
    optional: &'static [&'static str],
  ) -> Self {
    Self {
      name,
      required,
      optional,
    }
  }

  /// Whether `key` is a parameter of this method.
  pub fn accepts(&self, key: &str) -> bool {
    self.required.contains(&key) || self.optional.contains(&key)
  }

  /// Parameter keys in positional order: required first, then optional.
  pub fn fields(&self) -> impl Iterator<Item = &'static str> {
    let (required, optional) = (self.required, self.optional);
    required.iter().chain(optional.iter()).copied()
  }

  /// Validate a structured argument object and keep its recognized keys.
  ///
  /// A required key that is absent or `null` fails before anything is sent.
  pub fn bind(&self, mut params: Params) -> Result<Params> {
    for &param in self.required {
      match params.get(param) {
        None | Some(Value::Null) => {
          return Err(XbmcError::MissingRequiredParameter {
            method: self.name,
            param,
          })
        }
        Some(_) => {}
      }
    }

    let mut bound = Params::new();
    for field in self.fields() {
      if let Some(value) = params.remove(field) {
        bound.insert(field, value);
      }
    }
    for key in params.keys() {
      log::debug!("{}: ignoring unrecognized parameter `{}`", self.name, key);
    }
    Ok(bound)
  }

  /// Map positional arguments onto [`Method::fields`] order, then [`Method::bind`].
  ///
  /// `None` leaves a parameter out; `Some(Value::Null)` sends an explicit null.
  pub fn bind_positional(&self, args: Vec<Option<Value>>) -> Result<Params> {
    let accepted = self.required.len() + self.optional.len();
    if args.len() > accepted {
      return Err(XbmcError::InvalidArgument(format!(
        "{} takes at most {} arguments, got {}",
        self.name,
        accepted,
        args.len()
      )));
    }

    let params = self
      .fields()
      .zip(args)
      .filter_map(|(field, arg)| arg.map(|value| (field, value)))
      .collect();
    self.bind(params)
  }
}

/// Define a façade namespace from a method table.
///
/// Each row `fn_name => CONST = "Namespace.Method" [required...] [optional...];`
/// produces a `pub const` schema entry and a method on the namespace struct.
/// Rows with no parameters at all produce a method taking no arguments.
macro_rules! namespace {
  (
    $(#[$meta:meta])*
    $ns:ident {
      $(
        $(#[$fmeta:meta])*
        $fn_name:ident => $konst:ident = $wire:literal [$($req:literal),*] [$($opt:literal),*];
      )*
    }
  ) => {
    $(
      pub const $konst: $crate::methods::Method =
        $crate::methods::Method::new($wire, &[$($req),*], &[$($opt),*]);
    )*

    /// Every operation in this namespace.
    pub const METHODS: &[$crate::methods::Method] = &[$($konst),*];

    $(#[$meta])*
    #[derive(Clone, Copy)]
    pub struct $ns<'a> {
      client: &'a $crate::client::XbmcClient,
    }

    impl<'a> $ns<'a> {
      pub(crate) fn new(client: &'a $crate::client::XbmcClient) -> Self {
        Self { client }
      }

      $(
        namespace!(@method $(#[$fmeta])* $fn_name, $konst, [$($req),*], [$($opt),*]);
      )*
    }
  };

  (@method $(#[$fmeta:meta])* $fn_name:ident, $konst:ident, [], []) => {
    $(#[$fmeta])*
    pub fn $fn_name(&self) -> $crate::error::Result<$crate::call::PreparedCall> {
      self.client.prepare(&$konst, $crate::methods::Params::new())
    }
  };

  (@method $(#[$fmeta:meta])* $fn_name:ident, $konst:ident, [$($req:literal),*], [$($opt:literal),*]) => {
    $(#[$fmeta])*
    pub fn $fn_name(
      &self,
      params: impl Into<$crate::methods::Params>,
    ) -> $crate::error::Result<$crate::call::PreparedCall> {
      self.client.prepare(&$konst, params.into())
    }
  };
}

pub mod addons;
pub mod application;
pub mod audio_library;
pub mod files;
pub mod gui;
pub mod jsonrpc;
pub mod player;
pub mod video_library;

pub use addons::Addons;
pub use application::Application;
pub use audio_library::AudioLibrary;
pub use files::Files;
pub use gui::Gui;
pub use jsonrpc::JsonRpc;
pub use player::Player;
pub use video_library::VideoLibrary;

/// Look up a method schema by its wire name.
pub fn find(name: &str) -> Option<&'static Method> {
  [
    addons::METHODS,
    application::METHODS,
    audio_library::METHODS,
    files::METHODS,
    gui::METHODS,
    jsonrpc::METHODS,
    player::METHODS,
    video_library::METHODS,
  ]
  .into_iter()
  .flatten()
  .find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  const SET_THING: Method = Method::new("Test.SetThing", &["thingid"], &["title", "rating"]);

  #[test]
  fn test_missing_required_fails() {
    let err = SET_THING
      .bind(Params::new().with("title", "x"))
      .unwrap_err();
    match err {
      XbmcError::MissingRequiredParameter { method, param } => {
        assert_eq!(method, "Test.SetThing");
        assert_eq!(param, "thingid");
      }
      other => panic!("Expected MissingRequiredParameter, got {:?}", other),
    }
  }

  #[test]
  fn test_null_required_counts_as_missing() {
    assert!(SET_THING.bind(Params::new().with_null("thingid")).is_err());
  }

  #[test]
  fn test_only_provided_optionals_are_kept() {
    let bound = SET_THING
      .bind(Params::new().with("thingid", 4).with("rating", 7.5))
      .unwrap();
    assert_eq!(
      serde_json::to_value(&bound).unwrap(),
      json!({"thingid": 4, "rating": 7.5})
    );
    assert!(!bound.contains_key("title"));
  }

  #[test]
  fn test_unrecognized_keys_are_dropped() {
    let bound = SET_THING
      .bind(Params::new().with("thingid", 1).with("bogus", true))
      .unwrap();
    assert_eq!(bound.keys().collect::<Vec<_>>(), vec!["thingid"]);
  }

  #[test]
  fn test_positional_maps_field_by_field() {
    let bound = SET_THING
      .bind_positional(vec![Some(json!(9)), None, Some(Value::Null)])
      .unwrap();
    assert_eq!(
      serde_json::to_value(&bound).unwrap(),
      json!({"thingid": 9, "rating": null})
    );
  }

  #[test]
  fn test_positional_and_object_forms_agree() {
    let positional = SET_THING
      .bind_positional(vec![Some(json!(3)), Some(json!("Up"))])
      .unwrap();
    let object = SET_THING
      .bind(Params::new().with("title", "Up").with("thingid", 3))
      .unwrap();
    assert_eq!(positional, object);
  }

  #[test]
  fn test_positional_rejects_extra_arguments() {
    assert!(matches!(
      SET_THING.bind_positional(vec![Some(json!(1)), None, None, None]),
      Err(XbmcError::InvalidArgument(_))
    ));
    assert!(matches!(
      SET_THING.bind_positional(vec![]),
      Err(XbmcError::MissingRequiredParameter { .. })
    ));
  }

  #[test]
  fn test_find_by_wire_name() {
    let method = find("VideoLibrary.GetMovies").unwrap();
    assert!(method.required.is_empty());
    assert!(method.accepts("filter"));
    assert!(find("VideoLibrary.Nope").is_none());
  }

  #[test]
  fn test_schema_has_no_duplicate_keys() {
    for name in [
      "VideoLibrary.SetMovieDetails",
      "VideoLibrary.SetEpisodeDetails",
      "AudioLibrary.SetSongDetails",
      "GUI.ShowNotification",
    ] {
      let method = find(name).unwrap();
      let mut fields: Vec<_> = method.fields().collect();
      let total = fields.len();
      fields.sort_unstable();
      fields.dedup();
      assert_eq!(fields.len(), total, "{} repeats a key", name);
    }
  }
}

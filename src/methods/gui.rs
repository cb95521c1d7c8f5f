//! `GUI.*`.

namespace! {
  /// GUI control.
  Gui {
    activate_window => ACTIVATE_WINDOW = "GUI.ActivateWindow" ["window"] ["parameters"];
    get_properties => GET_PROPERTIES = "GUI.GetProperties" ["properties"] [];
    set_fullscreen => SET_FULLSCREEN = "GUI.SetFullscreen" ["fullscreen"] [];
    /// Pop up a notification on screen. `displaytime` is in milliseconds.
    show_notification => SHOW_NOTIFICATION = "GUI.ShowNotification" ["title", "message"] ["image", "displaytime"];
  }
}

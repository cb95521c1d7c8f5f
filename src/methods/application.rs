//! `Application.*`.

namespace! {
  /// Application control: volume, mute, quit.
  Application {
    get_properties => GET_PROPERTIES = "Application.GetProperties" ["properties"] [];
    quit => QUIT = "Application.Quit" [] [];
    set_mute => SET_MUTE = "Application.SetMute" ["mute"] [];
    set_volume => SET_VOLUME = "Application.SetVolume" ["volume"] [];
  }
}

//! `Player.*`.

namespace! {
  /// Playback control.
  Player {
    get_active_players => GET_ACTIVE_PLAYERS = "Player.GetActivePlayers" [] [];
    get_item => GET_ITEM = "Player.GetItem" ["playerid"] ["properties"];
    get_properties => GET_PROPERTIES = "Player.GetProperties" ["playerid", "properties"] [];
    go_to => GO_TO = "Player.GoTo" ["playerid", "to"] [];
    open => OPEN = "Player.Open" [] ["item", "options"];
    play_pause => PLAY_PAUSE = "Player.PlayPause" ["playerid"] ["play"];
    seek => SEEK = "Player.Seek" ["playerid", "value"] [];
    stop => STOP = "Player.Stop" ["playerid"] [];
  }
}

//! `AudioLibrary.*`: artists, albums and songs.

namespace! {
  /// Audio library queries and mutations.
  AudioLibrary {
    clean => CLEAN = "AudioLibrary.Clean" [] [];
    export => EXPORT = "AudioLibrary.Export" [] ["options"];
    get_album_details => GET_ALBUM_DETAILS = "AudioLibrary.GetAlbumDetails" ["albumid"] ["properties"];
    get_albums => GET_ALBUMS = "AudioLibrary.GetAlbums" [] ["properties", "limits", "sort", "filter"];
    get_artist_details => GET_ARTIST_DETAILS = "AudioLibrary.GetArtistDetails" ["artistid"] ["properties"];
    get_artists => GET_ARTISTS = "AudioLibrary.GetArtists" [] ["albumartistsonly", "properties", "limits", "sort", "filter"];
    get_genres => GET_GENRES = "AudioLibrary.GetGenres" [] ["properties", "limits", "sort"];
    get_recently_added_albums => GET_RECENTLY_ADDED_ALBUMS = "AudioLibrary.GetRecentlyAddedAlbums" [] ["properties", "limits", "sort"];
    get_recently_added_songs => GET_RECENTLY_ADDED_SONGS = "AudioLibrary.GetRecentlyAddedSongs" [] ["albumlimit", "properties", "limits", "sort"];
    get_recently_played_albums => GET_RECENTLY_PLAYED_ALBUMS = "AudioLibrary.GetRecentlyPlayedAlbums" [] ["properties", "limits", "sort"];
    get_recently_played_songs => GET_RECENTLY_PLAYED_SONGS = "AudioLibrary.GetRecentlyPlayedSongs" [] ["properties", "limits", "sort"];
    get_song_details => GET_SONG_DETAILS = "AudioLibrary.GetSongDetails" ["songid"] ["properties"];
    get_songs => GET_SONGS = "AudioLibrary.GetSongs" [] ["properties", "limits", "sort", "filter"];
    scan => SCAN = "AudioLibrary.Scan" [] ["directory"];
    set_album_details => SET_ALBUM_DETAILS = "AudioLibrary.SetAlbumDetails" ["albumid"] [
      "title", "artist", "description", "genre", "theme", "mood", "style", "type", "albumlabel",
      "rating", "year"
    ];
    set_artist_details => SET_ARTIST_DETAILS = "AudioLibrary.SetArtistDetails" ["artistid"] [
      "artist", "instrument", "style", "mood", "born", "formed", "description", "genre", "died",
      "disbanded", "yearsactive"
    ];
    set_song_details => SET_SONG_DETAILS = "AudioLibrary.SetSongDetails" ["songid"] [
      "title", "artist", "albumartist", "genre", "year", "rating", "album", "track", "disc", "duration",
      "comment", "musicbrainztrackid", "musicbrainzartistid", "musicbrainzalbumid",
      "musicbrainzalbumartistid", "playcount", "lastplayed"
    ];
  }
}

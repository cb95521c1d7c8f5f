//! `VideoLibrary.*`: movies, TV shows, episodes and music videos.

namespace! {
  /// Video library queries and mutations.
  VideoLibrary {
    /// Remove entries whose files no longer exist.
    clean => CLEAN = "VideoLibrary.Clean" [] [];
    export => EXPORT = "VideoLibrary.Export" [] ["options"];
    get_episode_details => GET_EPISODE_DETAILS = "VideoLibrary.GetEpisodeDetails" ["episodeid"] ["properties"];
    get_episodes => GET_EPISODES = "VideoLibrary.GetEpisodes" [] ["tvshowid", "season", "properties", "limits", "sort", "filter"];
    get_genres => GET_GENRES = "VideoLibrary.GetGenres" ["type"] ["properties", "limits", "sort"];
    get_movie_details => GET_MOVIE_DETAILS = "VideoLibrary.GetMovieDetails" ["movieid"] ["properties"];
    get_movie_set_details => GET_MOVIE_SET_DETAILS = "VideoLibrary.GetMovieSetDetails" ["setid"] ["properties", "movies"];
    get_movie_sets => GET_MOVIE_SETS = "VideoLibrary.GetMovieSets" [] ["properties", "limits", "sort"];
    get_movies => GET_MOVIES = "VideoLibrary.GetMovies" [] ["properties", "limits", "sort", "filter"];
    get_music_video_details => GET_MUSIC_VIDEO_DETAILS = "VideoLibrary.GetMusicVideoDetails" ["musicvideoid"] ["properties"];
    get_music_videos => GET_MUSIC_VIDEOS = "VideoLibrary.GetMusicVideos" [] ["properties", "limits", "sort", "filter"];
    get_recently_added_episodes => GET_RECENTLY_ADDED_EPISODES = "VideoLibrary.GetRecentlyAddedEpisodes" [] ["properties", "limits", "sort"];
    get_recently_added_movies => GET_RECENTLY_ADDED_MOVIES = "VideoLibrary.GetRecentlyAddedMovies" [] ["properties", "limits", "sort"];
    get_recently_added_music_videos => GET_RECENTLY_ADDED_MUSIC_VIDEOS = "VideoLibrary.GetRecentlyAddedMusicVideos" [] ["properties", "limits", "sort"];
    get_seasons => GET_SEASONS = "VideoLibrary.GetSeasons" ["tvshowid"] ["properties", "limits", "sort"];
    get_tv_show_details => GET_TV_SHOW_DETAILS = "VideoLibrary.GetTVShowDetails" ["tvshowid"] ["properties"];
    get_tv_shows => GET_TV_SHOWS = "VideoLibrary.GetTVShows" [] ["properties", "limits", "sort", "filter"];
    remove_episode => REMOVE_EPISODE = "VideoLibrary.RemoveEpisode" ["episodeid"] [];
    remove_movie => REMOVE_MOVIE = "VideoLibrary.RemoveMovie" ["movieid"] [];
    remove_music_video => REMOVE_MUSIC_VIDEO = "VideoLibrary.RemoveMusicVideo" ["musicvideoid"] [];
    remove_tv_show => REMOVE_TV_SHOW = "VideoLibrary.RemoveTVShow" ["tvshowid"] [];
    /// Scan sources (or a single `directory`) for new content.
    scan => SCAN = "VideoLibrary.Scan" [] ["directory"];
    set_episode_details => SET_EPISODE_DETAILS = "VideoLibrary.SetEpisodeDetails" ["episodeid"] [
      "title", "playcount", "runtime", "director", "plot", "rating", "votes", "lastplayed", "writer",
      "firstaired", "productioncode", "season", "episode", "originaltitle", "thumbnail", "fanart", "art"
    ];
    set_movie_details => SET_MOVIE_DETAILS = "VideoLibrary.SetMovieDetails" ["movieid"] [
      "title", "playcount", "runtime", "director", "studio", "year", "plot", "genre", "rating", "mpaa",
      "imdbnumber", "votes", "lastplayed", "originaltitle", "trailer", "tagline", "plotoutline", "writer",
      "country", "top250", "sorttitle", "set", "showlink", "thumbnail", "fanart", "tag", "art"
    ];
    set_music_video_details => SET_MUSIC_VIDEO_DETAILS = "VideoLibrary.SetMusicVideoDetails" ["musicvideoid"] [
      "title", "playcount", "runtime", "director", "studio", "year", "plot", "album", "artist", "genre",
      "track", "lastplayed", "thumbnail", "fanart", "tag", "art"
    ];
    set_tv_show_details => SET_TV_SHOW_DETAILS = "VideoLibrary.SetTVShowDetails" ["tvshowid"] [
      "title", "playcount", "studio", "plot", "rating", "mpaa", "imdbnumber", "premiered", "votes",
      "lastplayed", "originaltitle", "sorttitle", "episodeguide", "thumbnail", "fanart", "tag", "art"
    ];
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::methods::Params;
  use serde_json::json;

  #[test]
  fn test_get_movies_only_sends_given_keys() {
    let params = GET_MOVIES
      .bind(Params::new().with("properties", json!(["title", "year"])))
      .unwrap();
    assert_eq!(
      serde_json::to_value(&params).unwrap(),
      json!({"properties": ["title", "year"]})
    );
  }

  #[test]
  fn test_setters_require_their_id() {
    for (method, id) in [
      (SET_EPISODE_DETAILS, "episodeid"),
      (SET_MOVIE_DETAILS, "movieid"),
      (SET_MUSIC_VIDEO_DETAILS, "musicvideoid"),
      (SET_TV_SHOW_DETAILS, "tvshowid"),
    ] {
      assert_eq!(method.required, &[id]);
      assert!(method.bind(Params::new().with("title", "x")).is_err());
    }
  }
}

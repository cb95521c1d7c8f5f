//! `Files.*`: source and directory browsing.

namespace! {
  /// File browsing.
  Files {
    download => DOWNLOAD = "Files.Download" ["path"] [];
    /// List a directory. `media` selects the file mask (video, music, pictures, files, programs).
    get_directory => GET_DIRECTORY = "Files.GetDirectory" ["directory"] ["media", "properties", "sort"];
    get_file_details => GET_FILE_DETAILS = "Files.GetFileDetails" ["file"] ["media", "properties"];
    get_sources => GET_SOURCES = "Files.GetSources" ["media"] ["limits", "sort"];
    prepare_download => PREPARE_DOWNLOAD = "Files.PrepareDownload" ["path"] [];
  }
}

//! `Addons.*`.

namespace! {
  /// Addon control.
  Addons {
    execute_addon => EXECUTE_ADDON = "Addons.ExecuteAddon" ["addonid"] ["params", "wait"];
    get_addon_details => GET_ADDON_DETAILS = "Addons.GetAddonDetails" ["addonid"] ["properties"];
    get_addons => GET_ADDONS = "Addons.GetAddons" [] ["type", "content", "enabled", "properties", "limits"];
    set_addon_enabled => SET_ADDON_ENABLED = "Addons.SetAddonEnabled" ["addonid", "enabled"] [];
  }
}

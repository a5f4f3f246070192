//! Pure asset selection.

use relfetch_platform::{OsFamily, PlatformDescriptor};

use crate::data::AssetInfo;

/// Turn a release tag page URL into the prefix its assets download from.
///
/// Every `/tag/` segment becomes `/download/` and trailing slashes are
/// dropped.
///
/// # Examples
///
/// ```
/// use relfetch_release::core::download_prefix;
///
/// assert_eq!(
///     download_prefix("https://github.com/o/r/releases/tag/v1.0/"),
///     "https://github.com/o/r/releases/download/v1.0"
/// );
/// ```
pub fn download_prefix(html_url: &str) -> String {
    html_url.replace("/tag/", "/download/").trim_end_matches('/').to_string()
}

pub fn asset_url(prefix: &str, name: &str) -> String {
    format!("{prefix}/{name}")
}

/// Final path segment of a URL.
pub fn file_name(url: &str) -> &str {
    url.rsplit_once('/').map_or(url, |(_, name)| name)
}

/// Whether an asset is the installer for `platform`.
pub fn matches(name: &str, platform: &PlatformDescriptor) -> bool {
    match platform.os_family {
        OsFamily::Macos => name.ends_with(".dmg"),
        OsFamily::LinuxLike => name.ends_with(".txz") && name.ends_with(platform.installer_suffix()),
    }
}

/// First asset, in metadata order, that matches `platform`.
pub fn select_asset<'a>(assets: &'a [AssetInfo], platform: &PlatformDescriptor) -> Option<&'a AssetInfo> {
    assets.iter().find(|asset| matches(&asset.name, platform))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str) -> AssetInfo {
        AssetInfo {
            name: name.to_string(),
            size: 1,
        }
    }

    fn linux(is_64bit: bool) -> PlatformDescriptor {
        PlatformDescriptor::new(OsFamily::LinuxLike, is_64bit, if is_64bit { "x86_64" } else { "i686" })
    }

    fn macos() -> PlatformDescriptor {
        PlatformDescriptor::new(OsFamily::Macos, true, "x86_64")
    }

    #[test]
    fn test_select_linux_64() {
        let assets = [asset("a.deb"), asset("b.txz"), asset("c-x86_64.txz")];
        assert_eq!(select_asset(&assets, &linux(true)).unwrap().name, "c-x86_64.txz");
    }

    #[test]
    fn test_select_linux_32() {
        let assets = [asset("app-x86_64.txz"), asset("app-i686.txz")];
        assert_eq!(select_asset(&assets, &linux(false)).unwrap().name, "app-i686.txz");
    }

    #[test]
    fn test_select_macos() {
        let assets = [asset("app-x86_64.txz"), asset("app.dmg")];
        assert_eq!(select_asset(&assets, &macos()).unwrap().name, "app.dmg");
    }

    #[test]
    fn test_first_match_wins() {
        let assets = [asset("z-x86_64.txz"), asset("a-x86_64.txz")];
        assert_eq!(select_asset(&assets, &linux(true)).unwrap().name, "z-x86_64.txz");
    }

    #[test]
    fn test_no_match() {
        let assets = [asset("app.deb"), asset("app-x86_64.tar.gz"), asset("app.dmg")];
        assert!(select_asset(&assets, &linux(true)).is_none());
        assert!(select_asset(&[], &macos()).is_none());
    }

    #[test]
    fn test_suffix_must_be_at_end() {
        assert!(!matches("app-x86_64.txz.sig", &linux(true)));
        assert!(!matches("app.dmg.sha256", &macos()));
    }

    #[test]
    fn test_download_prefix() {
        assert_eq!(
            download_prefix("https://github.com/o/r/releases/tag/v0.20.1"),
            "https://github.com/o/r/releases/download/v0.20.1"
        );
        assert_eq!(
            download_prefix("https://github.com/o/r/releases/tag/v1//"),
            "https://github.com/o/r/releases/download/v1"
        );
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("https://h/o/r/releases/download/v1/app.dmg"), "app.dmg");
        assert_eq!(file_name("app.dmg"), "app.dmg");
        assert_eq!(file_name("https://h/dir/"), "");
    }

    #[test]
    fn test_asset_download_url() {
        let prefix = download_prefix("https://h/o/r/releases/tag/v1/");
        assert_eq!(asset("app.dmg").download_url(&prefix), "https://h/o/r/releases/download/v1/app.dmg");
    }
}

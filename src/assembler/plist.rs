//! Info.plist generation for framework bundles

/// File name of the bundle descriptor
pub const INFO_PLIST: &str = "Info.plist";

/// Values substituted into the descriptor template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPlist<'a> {
    /// `CFBundleExecutable`, the artifact's file name
    pub executable: &'a str,
    /// `CFBundleIdentifier`, reverse-DNS
    pub identifier: &'a str,
    /// `CFBundleName`, the module name
    pub name: &'a str,
    pub minimum_os_version: &'a str,
    /// Only entry of `CFBundleSupportedPlatforms`
    pub platform_name: &'a str,
}

impl InfoPlist<'_> {
    /// Render the descriptor. The output has no trailing newline so it
    /// stays byte-compatible with existing bundles.
    pub fn render(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleDevelopmentRegion</key>
    <string>en</string>
    <key>CFBundleExecutable</key>
    <string>{executable}</string>
    <key>CFBundleIdentifier</key>
    <string>{identifier}</string>
    <key>CFBundleInfoDictionaryVersion</key>
    <string>6.0</string>
    <key>CFBundleName</key>
    <string>{name}</string>
    <key>CFBundlePackageType</key>
    <string>FMWK</string>
    <key>CFBundleShortVersionString</key>
    <string>1.0</string>
    <key>CFBundleVersion</key>
    <string>1</string>
    <key>MinimumOSVersion</key>
    <string>{minimum_os_version}</string>
    <key>CFBundleSupportedPlatforms</key>
    <array>
        <string>{platform_name}</string>
    </array>
</dict>
</plist>"#,
            executable = self.executable,
            identifier = self.identifier,
            name = self.name,
            minimum_os_version = self.minimum_os_version,
            platform_name = self.platform_name,
        )
    }
}

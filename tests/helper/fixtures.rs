//! HTML fixtures shaped like the UniFi release listing

pub const RELEASE_PATH: &str = "/download/releases/network-server";

/// Anchors for 9.0.1, 9.1.120 and 9.1.2, plus a Windows build and navigation links
pub const ANCHOR_TITLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>UniFi Network Server</title></head>
<body>
  <nav><a href="/download">Downloads</a> <a href="/support" title="Support">Support</a></nav>
  <section class="releases">
    <div class="release">
      <a title="Download v 9.0.1 (Linux)" href="https://dl.ui.com/unifi/9.0.1/unifi_sysvinit_all.deb">Linux</a>
      <a title="Download v 9.0.1 (Windows)" href="https://dl.ui.com/unifi/9.0.1/UniFi-installer.exe">Windows</a>
    </div>
    <div class="release">
      <a title="Download v 9.1.120 (Linux)" href="https://dl.ui.com/unifi/9.1.120/unifi_sysvinit_all.deb">Linux</a>
      <a title="Download v 9.1.120 (Windows)" href="https://dl.ui.com/unifi/9.1.120/UniFi-installer.exe">Windows</a>
    </div>
    <div class="release">
      <a title="Download v 9.1.2 (Linux)" href="https://dl.ui.com/unifi/9.1.2/unifi_sysvinit_all.deb">Linux</a>
    </div>
  </section>
</body>
</html>"#;

/// Same releases advertised only through the href shape
pub const ANCHOR_HREF_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <ul>
    <li><a href="https://dl.ui.com/unifi/9.0.1/unifi_sysvinit_all.deb">9.0.1</a></li>
    <li><a href="https://dl.ui.com/unifi/9.1.120/unifi_sysvinit_all.deb">9.1.120</a></li>
    <li><a href="https://dl.ui.com/unifi/9.1.2/unifi_sysvinit_all.deb">9.1.2</a></li>
    <li><a href="https://dl.ui.com/unifi/9.1.120/UniFi.pkg">macOS</a></li>
  </ul>
</body>
</html>"#;

/// Release headings without download links
pub const HEADING_TITLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <h3 title="v 9.0.1 (Linux)">UniFi Network Server 9.0.1</h3>
  <h3 title="v 9.1.120 (Linux)">UniFi Network Server 9.1.120</h3>
  <h3 title="v 9.1.2 (Linux)">UniFi Network Server 9.1.2</h3>
</body>
</html>"#;

/// A valid release next to one whose version token is not numeric
pub const NON_NUMERIC_PAGE: &str = r#"<html><body>
  <a title="Download v a.b.c (Linux)" href="https://dl.ui.com/unifi/a.b.c/unifi_sysvinit_all.deb">Linux</a>
  <a title="Download v 9.1.2 (Linux)" href="https://dl.ui.com/unifi/9.1.2/unifi_sysvinit_all.deb">Linux</a>
</body></html>"#;

/// Matching anchors that all point at the wrong package
pub const WRONG_PACKAGE_PAGE: &str = r#"<html><body>
  <a title="Download v 9.1.120 (Linux)" href="https://dl.ui.com/unifi/9.1.120/unifi.tar.gz">Linux</a>
</body></html>"#;

pub const EMPTY_PAGE: &str = r#"<html><body><p>No releases yet.</p></body></html>"#;

pub const EXPECTED_LATEST_URL: &str = "https://dl.ui.com/unifi/9.1.120/unifi_sysvinit_all.deb";

//! `documents`
//!
//! The two documents generated into the staging root on every run: the
//! installation guide and the version synopsis. Both are overwritten
//! unconditionally; only the version synopsis carries the build timestamp.

use std::{fs, io, path::Path};

use chrono::{DateTime, Local};

use crate::PACKAGE_VERSION;

/// Fixed installation instructions shipped alongside the extension.
const INSTALLATION_GUIDE: &str = r#"# PDF Generator Pro - Installation Guide

## Quick Start

1. **Extract the Package**
   - Extract all files from this package to a folder on your computer
   - Remember the location of the `chrome-pdf-extension` folder

2. **Install in Chrome**
   - Open Chrome and go to `chrome://extensions/`
   - Enable "Developer mode" (toggle in top right)
   - Click "Load unpacked"
   - Select the `chrome-pdf-extension` folder
   - The extension should now appear in your extensions list

3. **Test the Extension**
   - Open the included `test-page.html` file in Chrome
   - Click the PDF Generator Pro icon in the toolbar
   - Try generating a PDF to verify everything works

## Detailed Instructions

See the README.md file in the chrome-pdf-extension folder for complete documentation.

## Troubleshooting

- Make sure you select the `chrome-pdf-extension` folder, not the parent folder
- If the extension doesn't load, check the Chrome console for error messages
- Ensure you have Chrome 88+ for full compatibility

## Support

For issues or questions, refer to the troubleshooting section in README.md
"#;

/// Writes `INSTALLATION.md` into the staging root.
pub(crate) fn write_installation_guide(staging: &Path) -> io::Result<()> {
    fs::write(staging.join("INSTALLATION.md"), INSTALLATION_GUIDE)
}

/// Writes `VERSION.txt` into the staging root, embedding the build
/// timestamp and a fixed synopsis of the package contents.
pub(crate) fn write_version_info(staging: &Path, built_at: DateTime<Local>) -> io::Result<()> {
    let contents = format!(
        r#"PDF Generator Pro v{version}
Package created: {timestamp}

Contents:
- chrome-pdf-extension/     Main extension files
- test-page.html           Test page for verification
- INSTALLATION.md          Installation instructions
- VERSION.txt              This file

Installation:
1. Extract all files
2. Open chrome://extensions/
3. Enable Developer mode
4. Click "Load unpacked"
5. Select the chrome-pdf-extension folder
"#,
        version = PACKAGE_VERSION,
        timestamp = built_at.format("%Y-%m-%d %H:%M:%S"),
    );
    fs::write(staging.join("VERSION.txt"), contents)
}

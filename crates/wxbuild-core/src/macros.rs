//! The wxWidgets compatibility macro file consumed by `aclocal`.
//!
//! Some wxWidgets installs ship without `wxwin.m4`, so `configure.ac` can't
//! expand `AM_OPTIONS_WXCONFIG` / `AM_PATH_WXCONFIG`. We write a minimal
//! replacement into the project's macro directory before regenerating.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BuildError, BuildResult};

/// File name of the compatibility macro file inside the macro directory.
pub const MACRO_FILE_NAME: &str = "wxwin.m4";

/// Fixed content of the compatibility macro file.
pub const WXWIN_M4: &str = r#"dnl wxwin.m4 - minimal wx-config macros for configure.ac
dnl Regenerated on every build; local edits are overwritten.

AC_DEFUN([AM_OPTIONS_WXCONFIG],
[
  AC_ARG_WITH([wx-config],
    [AS_HELP_STRING([--with-wx-config=PATH], [use the given wx-config script])],
    [WX_CONFIG_NAME="$withval"],
    [WX_CONFIG_NAME="wx-config"])
])

AC_DEFUN([AM_PATH_WXCONFIG],
[
  AC_PATH_PROG([WX_CONFIG_PATH], [$WX_CONFIG_NAME], [no])
  if test "x$WX_CONFIG_PATH" = "xno"; then
    AC_MSG_ERROR([wx-config not found. Install wxWidgets or pass --with-wx-config=PATH])
  fi
  WX_CPPFLAGS=`$WX_CONFIG_PATH --cppflags`
  WX_CXXFLAGS=`$WX_CONFIG_PATH --cxxflags`
  WX_LIBS=`$WX_CONFIG_PATH --libs`
  WX_VERSION=`$WX_CONFIG_PATH --version`
  AC_SUBST([WX_CPPFLAGS])
  AC_SUBST([WX_CXXFLAGS])
  AC_SUBST([WX_LIBS])
  AC_SUBST([WX_VERSION])
  $2
])
"#;

/// Write [`WXWIN_M4`] into `macro_dir`, creating the directory if needed.
///
/// Always truncates: running this any number of times leaves exactly one copy
/// of the two definitions.
pub fn write_compat_macros(macro_dir: &Path) -> BuildResult<PathBuf> {
    fs::create_dir_all(macro_dir).map_err(|e| BuildError::io(macro_dir, e))?;

    let path = macro_dir.join(MACRO_FILE_NAME);
    fs::write(&path, WXWIN_M4).map_err(|e| BuildError::io(&path, e))?;

    debug!(path = %path.display(), "Wrote compatibility macros");
    Ok(path)
}

//! Flags reported by the toolkit configuration-query tool.

/// Compiler and linker flags for building against the installed toolkit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolkitFlags {
    /// Output of `wx-config --cxxflags`.
    pub cxxflags: String,
    /// Output of `wx-config --libs`.
    pub libs: String,
}

impl ToolkitFlags {
    /// Variable assignments passed to the generated configure script.
    ///
    /// The toolkit's compiler flags come first so the fixed debug and
    /// optimization flags can override them.
    pub fn configure_args(&self, extra_cxxflags: &str) -> Vec<String> {
        let cxxflags = [self.cxxflags.trim(), extra_cxxflags.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        vec![
            format!("CXXFLAGS={cxxflags}"),
            format!("LDFLAGS={}", self.libs.trim()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_args_merge_flags() {
        let flags = ToolkitFlags {
            cxxflags: "-I/opt/wx/include -D__WXOSX_COCOA__".to_string(),
            libs: "-L/opt/wx/lib -lwx_osx_cocoau_core-3.2".to_string(),
        };
        assert_eq!(
            flags.configure_args("-g -O2"),
            vec![
                "CXXFLAGS=-I/opt/wx/include -D__WXOSX_COCOA__ -g -O2".to_string(),
                "LDFLAGS=-L/opt/wx/lib -lwx_osx_cocoau_core-3.2".to_string(),
            ]
        );
    }

    #[test]
    fn test_configure_args_with_empty_toolkit_flags() {
        let flags = ToolkitFlags::default();
        assert_eq!(
            flags.configure_args("-g -O2"),
            vec!["CXXFLAGS=-g -O2".to_string(), "LDFLAGS=".to_string()]
        );
    }
}

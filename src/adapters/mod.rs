pub mod portal_a;
pub mod portal_b;
pub mod remates;
pub mod traits;
pub mod types;

pub use portal_a::PortalAAdapter;
pub use portal_b::PortalBAdapter;
pub use remates::RematesAdapter;
pub use traits::SourceAdapter;

use std::path::Path;

/// Every known raw source, in output order
pub fn registered_adapters(raw_dir: &Path) -> Vec<Box<dyn SourceAdapter>> {
    vec![
        Box::new(PortalAAdapter::new(raw_dir)),
        Box::new(PortalBAdapter::new(raw_dir)),
        Box::new(RematesAdapter::new(raw_dir)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_registration_order() {
        let adapters = registered_adapters(Path::new("data/raw"));
        let names: Vec<&str> = adapters.iter().map(|a| a.source_name()).collect();
        assert_eq!(names, vec!["portal_a", "portal_b", "remates"]);
    }

    #[test]
    fn test_adapters_read_from_raw_dir() {
        let adapters = registered_adapters(Path::new("/srv/raw"));
        let paths: Vec<PathBuf> = adapters.iter().map(|a| a.raw_path().to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/srv/raw/portal_a.json"),
                PathBuf::from("/srv/raw/portal_b.json"),
                PathBuf::from("/srv/raw/remates.json"),
            ]
        );
    }
}

use nodegraphdesk_proto::Configuration;

/// With `subnetwork_mapping` on, a path below the top level is matched by its
/// last segment against `subnetwork_context_map`, first pattern wins.
/// Takes precedence over whatever node type the host reports.
pub fn subnetwork_context(path: &str, config: &Configuration) -> Option<String> {
    if !config.subnetwork_mapping {
        return None;
    }
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < 2 {
        return None;
    }

    let last = segments[segments.len() - 1];
    config
        .subnetwork_context_map
        .iter()
        .find(|(_, pattern)| !pattern.is_empty() && last.contains(pattern.as_str()))
        .map(|(context, _)| context.to_string())
}

/// Context named by the top-level segment (`/obj/geo1` -> `obj`), used when
/// the host cannot report a node type. Empty at the root.
pub fn top_level_context(path: &str) -> String {
    path.split('/')
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_of_path(path: &str, config: &Configuration) -> String {
        subnetwork_context(path, config).unwrap_or_else(|| top_level_context(path))
    }

    fn subnet_config() -> Configuration {
        let mut config = Configuration::new();
        config.subnetwork_mapping = true;
        config
            .subnetwork_context_map
            .insert("vop", "materialbuilder".to_string());
        config
            .subnetwork_context_map
            .insert("sop", "geo".to_string());
        config
    }

    #[test]
    fn test_top_level_segment() {
        let config = Configuration::new();
        assert_eq!(context_of_path("/obj", &config), "obj");
        assert_eq!(context_of_path("/obj/geo1/box1", &config), "obj");
        assert_eq!(context_of_path("/stage/", &config), "stage");
    }

    #[test]
    fn test_root_and_empty_paths() {
        let config = Configuration::new();
        assert_eq!(context_of_path("/", &config), "");
        assert_eq!(context_of_path("", &config), "");
    }

    #[test]
    fn test_subnetwork_pattern_matches_last_segment() {
        let config = subnet_config();
        assert_eq!(context_of_path("/mat/materialbuilder1", &config), "vop");
        assert_eq!(context_of_path("/obj/geo1", &config), "sop");
        assert_eq!(context_of_path("/obj/cam1", &config), "obj");
    }

    #[test]
    fn test_subnetwork_mapping_ignores_top_level() {
        let config = subnet_config();
        assert_eq!(context_of_path("/geo", &config), "geo");
    }

    #[test]
    fn test_subnetwork_context_only_on_match() {
        let config = subnet_config();
        assert_eq!(
            subnetwork_context("/mat/materialbuilder1", &config).as_deref(),
            Some("vop")
        );
        assert_eq!(subnetwork_context("/obj/cam1", &config), None);
        assert_eq!(subnetwork_context("/materialbuilder", &config), None);
        assert_eq!(top_level_context("/obj/cam1"), "obj");
    }

    #[test]
    fn test_subnetwork_mapping_disabled() {
        let mut config = subnet_config();
        config.subnetwork_mapping = false;
        assert_eq!(context_of_path("/mat/materialbuilder1", &config), "mat");
    }
}

use nodegraphdesk_proto::{AliasMap, Configuration};

/// Every name `type_name` may be matched under: itself first, then its alias
/// partner if it has one. A key wins over a value when a name is both.
pub fn resolve_alias(type_name: &str, alias_map: &AliasMap) -> Vec<String> {
    let mut names = vec![type_name.to_string()];
    if let Some(alias) = alias_map.get(type_name) {
        names.push(alias.clone());
    } else if let Some(canonical) = alias_map.key_of(&type_name.to_string()) {
        names.push(canonical.to_string());
    }
    names
}

/// Names a context is matched under, honouring the `alias_mapping` switch.
pub fn candidate_types(type_name: &str, config: &Configuration) -> Vec<String> {
    if config.alias_mapping {
        resolve_alias(type_name, &config.alias_map)
    } else {
        vec![type_name.to_string()]
    }
}

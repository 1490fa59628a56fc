/// Shown with status messages that do not concern a particular context.
pub const ICON_CANCELED: &str = "BUTTONS_cancel";
pub const ICON_CLEARED: &str = "BUTTONS_clear";
pub const ICON_ERROR: &str = "DIALOG_error";
const ICON_GENERIC: &str = "NETWORKS_subnet";

/// Network icon for a context, by top-level path name or type category.
pub fn icon_for_context(context_type: &str) -> &'static str {
    match context_type.to_lowercase().as_str() {
        "obj" | "object" => "NETWORKS_obj",
        "sop" | "geo" => "NETWORKS_sop",
        "mat" | "vop" => "NETWORKS_mat",
        "shop" => "NETWORKS_shop",
        "out" | "driver" | "rop" => "NETWORKS_rop",
        "ch" | "chop" => "NETWORKS_chop",
        "img" | "cop2" | "cop" | "copnet" => "NETWORKS_cop2",
        "stage" | "lop" => "NETWORKS_lop",
        "tasks" | "top" => "NETWORKS_top",
        "dop" => "NETWORKS_dop",
        _ => ICON_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_contexts() {
        assert_eq!(icon_for_context("obj"), "NETWORKS_obj");
        assert_eq!(icon_for_context("Object"), "NETWORKS_obj");
        assert_eq!(icon_for_context("stage"), "NETWORKS_lop");
        assert_eq!(icon_for_context("Cop2"), "NETWORKS_cop2");
    }

    #[test]
    fn test_unknown_context_falls_back() {
        assert_eq!(icon_for_context("scene"), ICON_GENERIC);
        assert_eq!(icon_for_context(""), ICON_GENERIC);
    }
}

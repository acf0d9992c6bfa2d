//! Static SheafUI component catalog and the query filter.
//!
//! The catalog is compiled into the binary: a fixed table of component
//! records, each with a slug, display title, one-line description, and the
//! usage snippet that gets copied verbatim (embedded newlines included).

use serde::Serialize;

/// One entry in the component catalog.
///
/// All fields are static; the catalog never mutates at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentRecord {
    /// Unique lowercase-hyphenated slug.
    pub name: &'static str,
    /// Human-readable display name.
    pub title: &'static str,
    /// One-line summary shown as the row subtitle.
    pub description: &'static str,
    /// Usage example, copied to the clipboard verbatim.
    pub snippet: &'static str,
}

impl ComponentRecord {
    /// The Blade component tag, e.g. `<x-ui.badge>`.
    pub fn tag(&self) -> String {
        format!("<x-ui.{}>", self.name)
    }

    /// The artisan install command for this component.
    pub fn install_command(&self) -> String {
        format!("php artisan sheaf:install {}", self.name)
    }

    /// Documentation page URL.
    pub fn docs_url(&self) -> String {
        format!("https://sheafui.dev/docs/components/{}", self.name)
    }

    /// Case-insensitive substring match against name, title, or description.
    ///
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Filter the catalog by a query string.
///
/// Empty query matches everything. The result preserves catalog order and
/// is recomputed from scratch on every call; for a table of this size a
/// linear scan is all it takes.
pub fn filter<'a>(catalog: &'a [ComponentRecord], query: &str) -> Vec<&'a ComponentRecord> {
    let needle = query.to_lowercase();
    catalog.iter().filter(|r| r.matches(&needle)).collect()
}

/// The full SheafUI component catalog.
pub static CATALOG: &[ComponentRecord] = &[
    ComponentRecord {
        name: "accordion",
        title: "Accordion",
        description: "Collapsible content sections",
        snippet: r#"<x-ui.accordion>
    <x-ui.accordion.item trigger="Accordion Title">
        <p>Accordion content goes here.</p>
    </x-ui.accordion.item>
</x-ui.accordion>"#,
    },
    ComponentRecord {
        name: "alerts",
        title: "Alert",
        description: "Notification alerts and messages",
        snippet: r#"<x-ui.alerts type="info">
    This is an alert message.
</x-ui.alerts>"#,
    },
    ComponentRecord {
        name: "autocomplete",
        title: "Autocomplete",
        description: "Search input with suggestions",
        snippet: r#"<x-ui.autocomplete
    name="search"
    placeholder="Search..."
    :options="$options"
/>"#,
    },
    ComponentRecord {
        name: "avatar",
        title: "Avatar",
        description: "User avatar display",
        snippet: r#"<x-ui.avatar src="/path/to/image.jpg" alt="Profile Picture" />"#,
    },
    ComponentRecord {
        name: "badge",
        title: "Badge",
        description: "Status badges and labels",
        snippet: r#"<x-ui.badge variant="primary">Badge</x-ui.badge>"#,
    },
    ComponentRecord {
        name: "brand",
        title: "Brand",
        description: "Brand/logo component",
        snippet: "<x-ui.brand />",
    },
    ComponentRecord {
        name: "breadcrumbs",
        title: "Breadcrumbs",
        description: "Navigation breadcrumbs",
        snippet: r#"<x-ui.breadcrumbs>
    <x-ui.breadcrumbs.item href="/">Home</x-ui.breadcrumbs.item>
    <x-ui.breadcrumbs.item href="/products">Products</x-ui.breadcrumbs.item>
    <x-ui.breadcrumbs.item active>Current Page</x-ui.breadcrumbs.item>
</x-ui.breadcrumbs>"#,
    },
    ComponentRecord {
        name: "button",
        title: "Button",
        description: "Interactive button component",
        snippet: "<x-ui.button>\n    Button\n</x-ui.button>",
    },
    ComponentRecord {
        name: "card",
        title: "Card",
        description: "Content card container",
        snippet: r#"<x-ui.card>
    <x-slot name="header">Card Title</x-slot>
    Card content goes here.
</x-ui.card>"#,
    },
    ComponentRecord {
        name: "checkbox",
        title: "Checkbox",
        description: "Checkbox input",
        snippet: r#"<x-ui.checkbox name="terms" label="I agree to the terms" />"#,
    },
    ComponentRecord {
        name: "description",
        title: "Description",
        description: "Description text component",
        snippet: "<x-ui.description>\n    This is a description text.\n</x-ui.description>",
    },
    ComponentRecord {
        name: "dropdown",
        title: "Dropdown Menu",
        description: "Dropdown menu component",
        snippet: r##"<x-ui.dropdown>
    <x-slot name="trigger">
        <x-ui.button>Open Menu</x-ui.button>
    </x-slot>
    <x-ui.dropdown.item href="#">Menu Item 1</x-ui.dropdown.item>
    <x-ui.dropdown.item href="#">Menu Item 2</x-ui.dropdown.item>
</x-ui.dropdown>"##,
    },
    ComponentRecord {
        name: "error",
        title: "Error Message",
        description: "Error message display",
        snippet: r#"<x-ui.error field="email" />"#,
    },
    ComponentRecord {
        name: "field",
        title: "Field",
        description: "Form field wrapper",
        snippet: r#"<x-ui.field label="Email" name="email">
    <x-ui.input type="email" name="email" />
</x-ui.field>"#,
    },
    ComponentRecord {
        name: "fieldset",
        title: "Fieldset",
        description: "Form fieldset grouping",
        snippet: r#"<x-ui.fieldset legend="Personal Information">
    <!-- Form fields here -->
</x-ui.fieldset>"#,
    },
    ComponentRecord {
        name: "heading",
        title: "Heading",
        description: "Heading text component",
        snippet: r#"<x-ui.heading level="h2" size="lg">Heading Text</x-ui.heading>"#,
    },
    ComponentRecord {
        name: "icon",
        title: "Icon",
        description: "Icon component (Phosphor icons)",
        snippet: r#"<x-ui.icon name="ps:house" class="size-5" />"#,
    },
    ComponentRecord {
        name: "input",
        title: "Input Field",
        description: "Text input component",
        snippet: r#"<x-ui.input type="text" name="username" placeholder="Enter username" />"#,
    },
    ComponentRecord {
        name: "key-value",
        title: "Key Value Pair",
        description: "Key-value pair input",
        snippet: r#"<x-ui.key-value name="env_vars" />"#,
    },
    ComponentRecord {
        name: "label",
        title: "Label",
        description: "Form label component",
        snippet: r#"<x-ui.label for="email">Email Address</x-ui.label>"#,
    },
    ComponentRecord {
        name: "link",
        title: "Link",
        description: "Anchor link component",
        snippet: r#"<x-ui.link href="/path">Link Text</x-ui.link>"#,
    },
    ComponentRecord {
        name: "modal",
        title: "Modal Dialog",
        description: "Modal/dialog component",
        snippet: r#"<x-ui.modal.trigger id="my-modal">
    <x-ui.button>Open Modal</x-ui.button>
</x-ui.modal.trigger>

<x-ui.modal id="my-modal" heading="Modal Title">
    <p>Modal content goes here.</p>
</x-ui.modal>"#,
    },
    ComponentRecord {
        name: "otp",
        title: "OTP Input",
        description: "One-time password input",
        snippet: r#"<x-ui.otp name="otp" length="6" />"#,
    },
    ComponentRecord {
        name: "popover",
        title: "Popover",
        description: "Popover tooltip",
        snippet: r#"<x-ui.popover>
    <x-slot name="trigger">
        <x-ui.button>Hover me</x-ui.button>
    </x-slot>
    Popover content here.
</x-ui.popover>"#,
    },
    ComponentRecord {
        name: "radio",
        title: "Radio Group",
        description: "Radio button group",
        snippet: r#"<x-ui.radio name="plan" value="monthly" label="Monthly" />
<x-ui.radio name="plan" value="yearly" label="Yearly" />"#,
    },
    ComponentRecord {
        name: "select",
        title: "Select",
        description: "Dropdown select input",
        snippet: r#"<x-ui.select name="country" placeholder="Select a country">
    <x-ui.select.option value="us">United States</x-ui.select.option>
    <x-ui.select.option value="mx">Mexico</x-ui.select.option>
    <x-ui.select.option value="ca">Canada</x-ui.select.option>
</x-ui.select>"#,
    },
    ComponentRecord {
        name: "separator",
        title: "Separator",
        description: "Visual separator/divider",
        snippet: "<x-ui.separator />",
    },
    ComponentRecord {
        name: "slider",
        title: "Slider",
        description: "Range slider input",
        snippet: r#"<x-ui.slider name="volume" min="0" max="100" value="50" />"#,
    },
    ComponentRecord {
        name: "switch",
        title: "Switch Toggle",
        description: "Toggle switch component",
        snippet: r#"<x-ui.switch name="notifications" label="Enable notifications" />"#,
    },
    ComponentRecord {
        name: "tabs",
        title: "Tabs",
        description: "Tab navigation component",
        snippet: r#"<x-ui.tabs>
    <x-ui.tabs.list>
        <x-ui.tabs.trigger value="tab1">Tab 1</x-ui.tabs.trigger>
        <x-ui.tabs.trigger value="tab2">Tab 2</x-ui.tabs.trigger>
    </x-ui.tabs.list>
    <x-ui.tabs.content value="tab1">Tab 1 content</x-ui.tabs.content>
    <x-ui.tabs.content value="tab2">Tab 2 content</x-ui.tabs.content>
</x-ui.tabs>"#,
    },
    ComponentRecord {
        name: "tags-input",
        title: "Tags Input",
        description: "Multi-tag input field",
        snippet: r#"<x-ui.tags-input name="tags" placeholder="Add tags..." />"#,
    },
    ComponentRecord {
        name: "text",
        title: "Text",
        description: "Text display component",
        snippet: "<x-ui.text>This is a paragraph of text.</x-ui.text>",
    },
    ComponentRecord {
        name: "textarea",
        title: "Textarea",
        description: "Multi-line text input",
        snippet: r#"<x-ui.textarea name="message" placeholder="Enter your message..." rows="4" />"#,
    },
    ComponentRecord {
        name: "theme-switcher",
        title: "Theme Switcher",
        description: "Dark/light theme toggle",
        snippet: "<x-ui.theme-switcher />",
    },
    ComponentRecord {
        name: "toast",
        title: "Toast Notification",
        description: "Toast notification system",
        snippet: r#"{{-- Add to layout --}}
<x-ui.toasts />

{{-- Trigger via Alpine.js --}}
<button x-on:click="$dispatch('notify', { type: 'success', content: 'Success!' })">
    Show Toast
</button>"#,
    },
    ComponentRecord {
        name: "tooltip",
        title: "Tooltip",
        description: "Hover tooltip component",
        snippet: r#"<x-ui.tooltip content="Tooltip text">
    <x-ui.button>Hover me</x-ui.button>
</x-ui.tooltip>"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_unique() {
        let mut seen = HashSet::new();
        for record in CATALOG {
            assert!(
                seen.insert(record.name),
                "duplicate catalog name: {}",
                record.name
            );
        }
    }

    #[test]
    fn test_empty_query_returns_whole_catalog_in_order() {
        let result = filter(CATALOG, "");
        assert_eq!(result.len(), CATALOG.len());
        for (got, want) in result.iter().zip(CATALOG.iter()) {
            assert_eq!(got.name, want.name);
        }
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let result = filter(CATALOG, "a");
        let positions: Vec<usize> = result
            .iter()
            .map(|r| CATALOG.iter().position(|c| c.name == r.name).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_filter_matches_one_of_three_fields() {
        for query in ["badge", "Dropdown Menu", "one-time password"] {
            let needle = query.to_lowercase();
            let result = filter(CATALOG, query);
            assert!(!result.is_empty(), "no match for {:?}", query);
            for record in &result {
                assert!(record.matches(&needle));
            }
            // Everything excluded really matches none of the three fields.
            for record in CATALOG {
                if !result.iter().any(|r| r.name == record.name) {
                    assert!(!record.matches(&needle));
                }
            }
        }
    }

    #[test]
    fn test_filter_is_pure() {
        let first = filter(CATALOG, "in");
        let second = filter(CATALOG, "in");
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_acc_finds_accordion() {
        let result = filter(CATALOG, "acc");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "accordion");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let result = filter(CATALOG, "Checkbox");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "checkbox");
    }

    #[test]
    fn test_query_without_match_returns_empty() {
        assert!(filter(CATALOG, "zzz-nonexistent").is_empty());
    }

    #[test]
    fn test_tag_synthesis() {
        let badge = CATALOG.iter().find(|r| r.name == "badge").unwrap();
        assert_eq!(badge.tag(), "<x-ui.badge>");
    }

    #[test]
    fn test_install_command_synthesis() {
        let modal = CATALOG.iter().find(|r| r.name == "modal").unwrap();
        let command = modal.install_command();
        assert!(command.starts_with("php artisan sheaf:install"));
        assert!(command.contains("modal"));
    }

    #[test]
    fn test_docs_url_synthesis() {
        let tabs = CATALOG.iter().find(|r| r.name == "tabs").unwrap();
        assert_eq!(tabs.docs_url(), "https://sheafui.dev/docs/components/tabs");
    }

    #[test]
    fn test_dropdown_snippet_keeps_placeholder_hrefs() {
        let dropdown = CATALOG.iter().find(|r| r.name == "dropdown").unwrap();
        assert_eq!(dropdown.snippet.matches(r##"href="#""##).count(), 2);
    }

    #[test]
    fn test_snippet_copied_verbatim_with_newlines() {
        let accordion = CATALOG.iter().find(|r| r.name == "accordion").unwrap();
        assert!(accordion.snippet.contains('\n'));
        assert!(accordion.snippet.starts_with("<x-ui.accordion>"));
        assert!(accordion.snippet.ends_with("</x-ui.accordion>"));
    }
}

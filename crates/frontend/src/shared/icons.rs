use leptos::prelude::*;

/// Stroke paths (24x24 grid) of the icons used by the console.
fn icon_paths(name: &str) -> Option<&'static [&'static str]> {
    let paths: &'static [&'static str] = match name {
        "plus" => &["M12 5v14", "M5 12h14"],
        "x" => &["M18 6 6 18", "m6 6 12 12"],
        "refresh" => &[
            "M21 12a9 9 0 0 0-9-9 9.75 9.75 0 0 0-6.74 2.74L3 8",
            "M3 3v5h5",
            "M3 12a9 9 0 0 0 9 9 9.75 9.75 0 0 0 6.74-2.74L21 16",
            "M16 16h5v5",
        ],
        "edit" => &["M12 20h9", "M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4Z"],
        "delete" => &[
            "M3 6h18",
            "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
            "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
        ],
        "check" => &["M20 6 9 17l-5-5"],
        "arrow-left" => &["m12 19-7-7 7-7", "M19 12H5"],
        "chevron-left" => &["m15 18-6-6 6-6"],
        "chevron-right" => &["m9 18 6-6-6-6"],
        "chevrons-left" => &["m11 17-5-5 5-5", "m18 17-5-5 5-5"],
        "chevrons-right" => &["m6 17 5-5-5-5", "m13 17 5-5-5-5"],
        "database" => &[
            "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
            "M3 5v14a9 3 0 0 0 18 0V5",
            "M3 12a9 3 0 0 0 18 0",
        ],
        "upload" => &[
            "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
            "m17 8-5-5-5 5",
            "M12 3v12",
        ],
        "file" => &[
            "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8Z",
            "M14 2v6h6",
        ],
        "layers" => &["m12 2 10 5-10 5L2 7Z", "m2 17 10 5 10-5", "m2 12 10 5 10-5"],
        "package" => &[
            "M16.5 9.4 7.5 4.21",
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.27 6.96 12 12.01l8.73-5.05",
            "M12 22.08V12",
        ],
        "barcode" => &["M3 5v14", "M8 5v14", "M12 5v14", "M17 5v14", "M21 5v14"],
        "alert-triangle" => &[
            "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z",
            "M12 9v4",
            "M12 17h.01",
        ],
        "settings" => &[
            "M9 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.6 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.6a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
        ],
        "home" => &["m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
        "search" => &["M3 11a8 8 0 1 0 16 0a8 8 0 1 0-16 0", "m21 21-4.3-4.3"],
        _ => return None,
    };
    Some(paths)
}

/// Compact icons drawn at 16px inside dense controls.
fn icon_size(name: &str) -> &'static str {
    match name {
        "x" | "chevron-left" | "chevron-right" | "chevrons-left" | "chevrons-right" => "16",
        _ => "20",
    }
}

pub fn icon(name: &str) -> AnyView {
    let Some(paths) = icon_paths(name) else {
        log::warn!("unknown icon: {}", name);
        return view! { <span class="icon-missing"></span> }.into_any();
    };
    let size = icon_size(name);

    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d={*d} /> }).collect_view()}
        </svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_icons() {
        assert!(icon_paths("database").is_some());
        assert!(icon_paths("nope").is_none());
        assert_eq!(icon_size("x"), "16");
        assert_eq!(icon_size("home"), "20");
    }
}

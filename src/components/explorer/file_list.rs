//! File list component for the explorer view.
//!
//! Folder rows navigate. File rows are click triggers: they carry the
//! `icon-file` marker class and the `data-*` attributes read by the
//! document-level click listener, which decides how the file opens.

use icondata::Icon as IconData;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use panview_core::format::format_size;
use panview_core::trigger::TRIGGER_CLASS;
use panview_core::{FileNode, FileTrigger, MediaType};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// Icon for a listing entry.
fn get_icon(node: &FileNode, office: bool) -> IconData {
    if node.is_folder {
        return ic::FOLDER;
    }
    match node.media() {
        MediaType::Image => ic::FILE_IMAGE,
        MediaType::Video => ic::FILE_VIDEO,
        MediaType::Audio => ic::FILE_AUDIO,
        MediaType::Text => ic::FILE_TEXT,
        _ if office => ic::FILE_OFFICE,
        _ if node.extension() == "pdf" => ic::FILE_PDF,
        _ => ic::FILE,
    }
}

/// List of the entries for the current route.
#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // None = the route does not name a directory
    let entries = Signal::derive(move || {
        let route = ctx.route.get();
        ctx.drive.with(|d| match &route.search {
            Some(key) => Some(d.listing.search(key)),
            None => d.listing.list_dir(&route.path),
        })
    });

    let show_parent = Signal::derive(move || {
        let route = ctx.route.get();
        !route.is_search() && route.path != "/"
    });

    view! {
        <div class=css::list role="grid" aria-label="File list">
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                <span class=css::headerName>"Name"</span>
                <span class=css::headerDate>"Modified"</span>
                <span class=css::headerSize>"Size"</span>
            </div>

            <Show when=move || show_parent.get()>
                <ParentRow />
            </Show>

            {move || match entries.get() {
                None => view! {
                    <div class=css::empty>"Directory not found"</div>
                }.into_any(),
                Some(list) if list.is_empty() => view! {
                    <div class=css::empty>
                        {if ctx.route.get_untracked().is_search() { "No matching files" } else { "This folder is empty" }}
                    </div>
                }.into_any(),
                Some(list) => view! {
                    <For
                        each=move || list.clone()
                        key=|node| node.path.clone()
                        children=move |node| view! { <FileListItem node=node /> }
                    />
                }.into_any(),
            }}
        </div>
    }
}

/// ".." row leading to the parent directory.
#[component]
fn ParentRow() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div
            class=css::listItem
            role="row"
            tabindex="0"
            aria-label="Parent folder"
            on:click=move |_| ctx.route.get_untracked().parent().push()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=ic::FOLDER /></span>
            <span class=format!("{} {}", css::name, css::nameDir)>".."</span>
            <span class=css::itemDate></span>
            <span class=css::size></span>
        </div>
    }
}

#[component]
fn FileListItem(node: FileNode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let office = ctx
        .config
        .with_value(|c| c.viewer.is_office(&node.extension()));
    let icon = get_icon(&node, office);
    let size = if node.is_folder {
        "-".to_string()
    } else {
        format_size(node.file_size)
    };
    let modified = node.last_op_time.clone();
    let display_name = if node.is_folder {
        format!("{}/", node.file_name)
    } else {
        node.file_name.clone()
    };

    if node.is_folder {
        let path = node.path.clone();
        let open_dir = move |_: ev::MouseEvent| {
            let drive = ctx.route.get_untracked().drive;
            crate::models::AppRoute::browse(drive, &path).push();
        };

        return view! {
            <div
                class=css::listItem
                role="row"
                tabindex="0"
                aria-label=format!("Folder: {}", node.file_name)
                on:click=open_dir
            >
                <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                <span class=format!("{} {}", css::name, css::nameDir)>{display_name}</span>
                <span class=css::itemDate>{modified}</span>
                <span class=css::size>{size}</span>
            </div>
        }
        .into_any();
    }

    let [(_, url), (_, title), (_, media_type), (_, file_type)] =
        FileTrigger::from_node(&node).data_attributes();

    // Enter activates the row through the same click path as the mouse
    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter"
            && let Some(el) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        {
            ev.prevent_default();
            el.click();
        }
    };

    view! {
        <div
            class=format!("{} {}", css::listItem, TRIGGER_CLASS)
            role="row"
            tabindex="0"
            aria-label=format!("File: {}", node.file_name)
            data-url=url
            data-title=title
            data-media-type=media_type
            data-file-type=file_type
            on:keydown=handle_keydown
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=format!("{} {}", css::name, css::nameFile)>{display_name}</span>
            <span class=css::itemDate>{modified}</span>
            <span class=css::size>{size}</span>
        </div>
    }
    .into_any()
}

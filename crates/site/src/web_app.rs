use leptos::*;
use leptos_meta::*;
use senc_host::{TreeNode, TreeResult};

use crate::view::SencView;

#[component]
pub fn SiteApp(surface: SencView) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Encrypted File Viewer" />
        <Meta name="description" content="Browse encrypted IPFS directory trees in the browser." />

        <main class="senc-root">
            <ViewerPanel surface=surface />
        </main>
    }
}

#[component]
fn ViewerPanel(surface: SencView) -> impl IntoView {
    let SencView {
        key,
        path,
        loading,
        tree,
        error,
        ..
    } = surface.clone();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        surface.submit();
    };

    view! {
        <section class="senc-viewer">
            <form class="senc-form" on:submit=on_submit>
                <label class="senc-field">
                    <span>"Key"</span>
                    <input
                        type="text"
                        name="key"
                        autocomplete="off"
                        prop:value=move || key.get()
                        on:input=move |ev| key.set(event_target_value(&ev))
                    />
                </label>
                <label class="senc-field">
                    <span>"Path"</span>
                    <input
                        type="text"
                        name="path"
                        placeholder="/ipfs/..."
                        prop:value=move || path.get()
                        on:input=move |ev| path.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || loading.get()>"Load"</button>
            </form>

            <Show when=move || loading.get()>
                <p class="senc-loading" role="status">"Loading..."</p>
            </Show>

            {move || error.get().map(|message| view! {
                <p class="senc-error" role="alert">{message}</p>
            })}

            {move || tree.get().map(|tree| view! { <TreeListing tree=tree /> })}
        </section>
    }
}

#[component]
fn TreeListing(tree: TreeResult) -> impl IntoView {
    let summary = format!("{} ({} entries)", tree.path, tree.root.node_count());

    view! {
        <div class="senc-tree">
            <h2 class="senc-tree-path">{summary}</h2>
            <ul class="senc-tree-root">{tree_node_view(&tree.root)}</ul>
        </div>
    }
}

fn node_label(node: &TreeNode) -> String {
    match (node.is_dir(), node.name.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("{}/", node.name),
        (false, _) => format!("{} ({} bytes)", node.name, node.size),
    }
}

fn tree_node_view(node: &TreeNode) -> View {
    let class = if node.is_dir() {
        "senc-node senc-dir"
    } else {
        "senc-node senc-file"
    };
    let children = node.children.iter().map(tree_node_view).collect_view();

    view! {
        <li class=class>
            <span class="senc-node-name">{node_label(node)}</span>
            <ul>{children}</ul>
        </li>
    }
    .into_view()
}

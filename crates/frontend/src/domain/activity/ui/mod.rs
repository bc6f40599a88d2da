use leptos::prelude::*;

use super::log::{self, ActivityEntry};
use contracts::enums::stock_status::StockStatus;

fn status_badge_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "badge badge--success",
        StockStatus::LowStock => "badge badge--warning",
        StockStatus::OutOfStock => "badge badge--error",
    }
}

/// Recent inventory actions of this pharmacy, loaded from localStorage on
/// mount. Relative timestamps are computed at read time.
#[component]
pub fn RecentActivityList() -> impl IntoView {
    let entries = RwSignal::new(Vec::<ActivityEntry>::new());

    Effect::new(move |_| {
        entries.set(log::read());
    });

    view! {
        <div class="card recent-activity">
            <div class="card__body">
                <h2 class="section-title">"Recent activity"</h2>
                <Show
                    when=move || !entries.get().is_empty()
                    fallback=|| view! { <p class="empty-message">"No recent activity yet."</p> }
                >
                    <ul class="recent-activity__list">
                        {move || {
                            entries
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <li class="recent-activity__item">
                                            <div class="recent-activity__main">
                                                <strong>{entry.medicine_name}</strong>
                                                <span class="recent-activity__action">{entry.action}</span>
                                            </div>
                                            <div class="recent-activity__meta">
                                                <span class=status_badge_class(entry.status)>
                                                    {entry.status.display_name()}
                                                </span>
                                                <small class="recent-activity__time">{entry.timestamp}</small>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </div>
        </div>
    }
}

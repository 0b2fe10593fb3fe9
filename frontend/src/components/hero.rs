//! Hero section component

use leptos::*;

use crate::{APP_NAME, MIN_IMAGE_DIMENSION};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Drop a photo to find out what it shows. "
                {format!("Images must be at least {0}x{0} pixels.", MIN_IMAGE_DIMENSION)}
            </p>
        </div>
    }
}

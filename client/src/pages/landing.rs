//! The single scrolling landing page.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::editorial::Editorial;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::journals::Journals;
use crate::components::mission::Mission;
use crate::components::navbar::Navbar;
use crate::components::vision::Vision;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar />
            <main>
                <Hero />
                <About />
                <Vision />
                <Mission />
                <Journals />
                <Editorial />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

//! Landing page: hero, services, selected work, about, and contact sections.

use leptos::prelude::*;

use crate::components::contact_modal::ContactModal;
use crate::components::navbar::Navbar;
use crate::state::ui::UiState;
use crate::state::work::{HERO_STATS, SERVICES, selected_work};

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open_contact = move |_| ui.update(UiState::open_contact);

    view! {
        <div class="site">
            <Navbar/>
            <main>
                <section class="hero">
                    <h1 class="hero__title">"We build digital products that drive real growth"</h1>
                    <p class="hero__lead">
                        "From concept to launch, we create custom web & mobile applications that solve real business challenges. No fluff, just results."
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--primary" on:click=open_contact>"Start Your Project"</button>
                        <a class="btn btn--ghost" href="/work">"View Our Work"</a>
                    </div>
                    <div class="hero__stats">
                        {HERO_STATS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="hero__stat">
                                        <h3>{*value}</h3>
                                        <p>{*label}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section id="services" class="services">
                    <h2 class="section__eyebrow">"What We Do"</h2>
                    <h3 class="section__title">"Services"</h3>
                    <div class="services__grid">
                        {SERVICES
                            .iter()
                            .map(|service| {
                                view! {
                                    <article class="service-card">
                                        <h4>{service.title}</h4>
                                        <p>{service.description}</p>
                                        <ul>
                                            {service.features.iter().map(|f| view! { <li>{*f}</li> }).collect::<Vec<_>>()}
                                        </ul>
                                    </article>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section id="work" class="selected-work">
                    <h2 class="section__eyebrow">"Portfolio"</h2>
                    <h3 class="section__title">"Selected Work"</h3>
                    <div class="selected-work__grid">
                        {selected_work()
                            .into_iter()
                            .map(|project| {
                                view! {
                                    <a class=format!("work-card {}", project.accent) href=format!("/work/{}", project.slug)>
                                        <span class="work-card__category">{project.category}</span>
                                        <h4>{project.title}</h4>
                                        <p>{project.description}</p>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <a class="btn btn--ghost" href="/work">"View All Projects"</a>
                </section>

                <section id="about" class="about">
                    <h2 class="section__eyebrow">"About Us"</h2>
                    <h3 class="section__title">"Who We Are"</h3>
                    <p>
                        "With years of expertise in web and mobile development, we help businesses transform their ideas into reality."
                    </p>
                    <div class="about__points">
                        <div>
                            <h4>"Mission Driven"</h4>
                            <p>"Focused on delivering real value to our clients"</p>
                        </div>
                        <div>
                            <h4>"Innovation First"</h4>
                            <p>"Always exploring new technologies and approaches"</p>
                        </div>
                    </div>
                </section>

                <section id="contact" class="contact">
                    <h3 class="section__title">"Ready to start?"</h3>
                    <p>"Let's discuss how we can help bring your digital vision to life"</p>
                    <button class="btn btn--primary" on:click=open_contact>"Contact Us"</button>
                    <footer class="contact__footer">
                        <a href="#">"Privacy Policy"</a>
                        <a href="#">"Terms of Service"</a>
                    </footer>
                </section>
            </main>
            <ContactModal/>
        </div>
    }
}

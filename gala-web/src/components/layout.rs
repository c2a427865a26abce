use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="brand">
                <span class="icon">{ "🏆" }</span>
                <span class="brand-name">{ "Excellence Awards" }</span>
            </div>
            <nav>
                <ul>
                    <li><a href="#">{ "Home" }</a></li>
                    <li><a href="#">{ "About" }</a></li>
                    <li><a href="#">{ "Nominees" }</a></li>
                    <li><a href="#">{ "Contact" }</a></li>
                </ul>
            </nav>
        </header>
    }
}

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    (
        "🍽",
        "Gourmet Dinner",
        "Savor a meticulously crafted 3-course meal prepared by top chefs.",
    ),
    (
        "🏆",
        "Awards Ceremony",
        "Witness the recognition of outstanding achievements across multiple categories.",
    ),
    (
        "🎵",
        "Live Entertainment",
        "Enjoy captivating performances throughout the evening.",
    ),
];

#[function_component(Highlights)]
pub fn highlights() -> Html {
    html! {
        <section class="highlights">
            <h2>{ "What to Expect" }</h2>
            <div class="highlight-grid">
                { for HIGHLIGHTS.iter().map(|(icon, title, text)| html! {
                    <div class="highlight" key={*title}>
                        <span class="icon">{ *icon }</span>
                        <h3>{ *title }</h3>
                        <p>{ *text }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{ "© 2024 Excellence Awards. All rights reserved." }</p>
        </footer>
    }
}

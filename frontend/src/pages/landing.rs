use std::rc::Rc;

use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::accordion::AccordionItem;
use crate::components::carousel::TestimonialCarousel;
use crate::components::countdown::Countdown;
use crate::components::counter::AnimatedCounter;
use crate::components::cta::CtaButton;
use crate::components::icons::{Checkmark, Glyph, GuaranteeSeal, Icon};
use crate::components::reveal::{Entrance, ScrollReveal};
use crate::content::{use_catalog, Catalog};

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="offer-bar">
            <div class="offer-bar-inner">
                <p class="wide-only">{"Essa oferta vai sumir em..."}</p>
                <p class="narrow-only">{"Oferta acaba em..."}</p>
                <Countdown />
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let catalog = use_catalog();
    let mockup = [
        (Icon::Product, "o-50"),
        (Icon::Video, "o-80"),
        (Icon::Lessons, "o-60"),
        (Icon::Strategy, "o-70"),
        (Icon::Ai, "o-90"),
        (Icon::Schedule, "o-50"),
    ];

    html! {
        <section class="hero" id="hero">
            <div class="hero-grid"></div>
            <div class="glow glow-gold"></div>
            <div class="glow glow-blue"></div>

            <div class="container hero-content">
                <div class="animate-fade-in">
                    <h1 class="headline">
                        {"Receba "}<span class="gold">{"10.000 produtos"}</span>
                        {" prontos, vídeos virais e uma estratégia completa pra vender todos os dias"}
                    </h1>
                    <p class="headline headline-tail">{"— mesmo começando do zero."}</p>
                    <p class="hero-promise">
                        {"Aplique tudo. Se não vender, além do reembolso, "}
                        <span class="strong">{"eu te dou R$200"}</span>{"."}
                    </p>
                    <div class="hero-cta">
                        <CtaButton pulsing=true>{ format!("Quero começar agora por {}", catalog.offer.price) }</CtaButton>
                    </div>
                </div>

                <div class="mockup animate-float">
                    <div class="mockup-frame">
                        <div class="mockup-dots">
                            <div class="dot dot-red"></div>
                            <div class="dot dot-yellow"></div>
                            <div class="dot dot-green"></div>
                        </div>
                        <div class="mockup-screen">
                            <div class="mockup-icons">
                                { for mockup.iter().map(|(icon, opacity)| html! {
                                    <Glyph icon={*icon} class={classes!("mockup-icon", *opacity)} />
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    let catalog = use_catalog();
    html! {
        <ScrollReveal class="section" >
            <div class="container" id="features">
                <h2 class="section-title">{"O que você "}<span class="gold">{"recebe"}</span>{" ao entrar hoje"}</h2>
                <p class="section-lead">{"Um arsenal completo para você construir sua operação de vendas online do zero, sem desculpas."}</p>
                <div class="features-grid">
                    { for catalog.features.iter().enumerate().map(|(i, feature)| html! {
                        <div key={i} class="feature-card">
                            <Glyph icon={feature.icon} class="feature-icon" />
                            <h3>{ &feature.title }</h3>
                            <p>{ &feature.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </ScrollReveal>
    }
}

#[function_component(Value)]
fn value() -> Html {
    let catalog = use_catalog();
    html! {
        <ScrollReveal class="section">
            <div class="container" id="value">
                <div class="value-panel">
                    <h2>
                        {"Todo o pacote vale mais de R$"}
                        <AnimatedCounter target={catalog.offer.bundle_value} />
                        {", mas hoje..."}
                    </h2>
                    <p class="muted">{"Você não vai pagar nem perto disso."}</p>
                    <div class="price-block">
                        <p class="eyebrow">{"Acesso Imediato Por Apenas"}</p>
                        <p class="price">{ &catalog.offer.price }</p>
                        <p class="eyebrow-small">{"(Pagamento único)"}</p>
                    </div>
                    <CtaButton>{"EU QUERO ESSE DESCONTO"}</CtaButton>
                </div>
            </div>
        </ScrollReveal>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let catalog = use_catalog();
    let testimonials: Rc<[_]> = catalog.testimonials.clone().into();
    html! {
        <ScrollReveal class={classes!("section", "tinted")} entrance={Entrance::FadeIn}>
            <div class="container" id="testimonials">
                <h2 class="section-title">{"A prova de que "}<span class="gold">{"funciona"}</span></h2>
                <TestimonialCarousel testimonials={testimonials} />
            </div>
        </ScrollReveal>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    let catalog = use_catalog();
    html! {
        <ScrollReveal class="section">
            <div class="container" id="how-it-works">
                <h2 class="section-title">{"Como funciona? "}<span class="gold">{"É simples."}</span></h2>
                <div class="steps-grid">
                    { for catalog.steps.iter().enumerate().map(|(i, step)| html! {
                        <div key={i} class="step">
                            <div class="step-number">{ (i + 1).to_string() }</div>
                            <h3>{ &step.title }</h3>
                            <p>{ &step.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </ScrollReveal>
    }
}

#[function_component(Faq)]
fn faq() -> Html {
    let catalog = use_catalog();
    html! {
        <ScrollReveal class={classes!("section", "tinted")}>
            <div class="container" id="faq">
                <h2 class="section-title">{"Perguntas Frequentes"}</h2>
                <div class="faq-list">
                    { for catalog.faq.iter().enumerate().map(|(i, item)| html! {
                        <AccordionItem key={i} item={item.clone()} />
                    }) }
                </div>
            </div>
        </ScrollReveal>
    }
}

#[function_component(Guarantee)]
fn guarantee() -> Html {
    let catalog = use_catalog();
    html! {
        <ScrollReveal class="section">
            <div class="container" id="guarantee">
                <div class="guarantee-panel">
                    <GuaranteeSeal class="spin-slow" />
                    <div>
                        <h2>{"Garantia Blindada de Risco Zero"}</h2>
                        <p class="guarantee-quote">{"\"Se aplicar tudo e não vender, devolvo seu dinheiro + R$200 no seu bolso.\""}</p>
                        <p class="muted">
                            {format!(
                                "É simples. Você tem 30 dias para aplicar o método. Se seguir o passo a passo e, mesmo assim, não realizar nenhuma venda, eu não só devolvo 100% do seu investimento de {}, como também te envio um PIX de R$200 pelo seu tempo. O risco é todo meu.",
                                catalog.offer.price
                            )}
                        </p>
                    </div>
                </div>
            </div>
        </ScrollReveal>
    }
}

#[function_component(FinalOffer)]
fn final_offer() -> Html {
    let catalog = use_catalog();
    html! {
        <ScrollReveal class="section">
            <div class="container narrow" id="final-offer">
                <h2 class="section-title">{"Essa é sua "}<span class="gold">{"última chance"}</span></h2>
                <p class="section-lead">{"Depois que o cronômetro zerar, essa oferta com todos os bônus e a garantia dupla desaparecerá para sempre."}</p>

                <div class="recap">
                    { for catalog.recap.iter().enumerate().map(|(i, line)| html! {
                        <p key={i} class="recap-line">
                            <Checkmark class="recap-check" />
                            <span>{ &line.before }<span class="strong">{ &line.highlight }</span>{ &line.after }</span>
                        </p>
                    }) }
                </div>

                <CtaButton pulsing=true class="cta-wide">{"QUERO GARANTIR MINHA VAGA AGORA"}</CtaButton>
                <p class="fine-print">{"Clique no botão. Acesso imediato."}</p>
            </div>
        </ScrollReveal>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = Local::now().year();
    html! {
        <footer class="footer">
            <div class="container">
                <p>{ format!("Copyright © {} - Máquina de Vendas IA. Todos os direitos reservados.", year) }</p>
                <p class="cnpj">{"CNPJ Fictício: 33.041.260/0652-90"}</p>
                <div class="footer-links">
                    <a href="#guarantee">{"Garantia de 30 dias"}</a>
                    <span>{"|"}</span>
                    <a href="#">{"Contato por E-mail"}</a>
                    <span>{"|"}</span>
                    <a href="#">{"Política de Reembolso"}</a>
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    html! {
        <ContextProvider<Rc<Catalog>> context={props.catalog.clone()}>
            <div class="landing-page">
                <Header />
                <main class="landing-main">
                    <Hero />
                    <Features />
                    <Value />
                    <Testimonials />
                    <HowItWorks />
                    <Faq />
                    <Guarantee />
                    <FinalOffer />
                </main>
                <Footer />
            </div>
            <style>{ LANDING_CSS }</style>
        </ContextProvider<Rc<Catalog>>>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    background: #0a0a0a;
    color: #ffffff;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    overflow-x: hidden;
}
.landing-main {
    padding-top: 60px;
}
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.container.narrow {
    max-width: 42rem;
    text-align: center;
}
.gold { color: #FFD700; }
.strong { font-weight: 700; color: #ffffff; }
.muted { color: rgba(255, 255, 255, 0.7); margin-top: 1rem; }
h1, h2, h3, .headline, .price, .step-number, .timer-value {
    font-family: 'Poppins', sans-serif;
}

/* Offer bar */
.offer-bar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: rgba(10, 10, 10, 0.8);
    backdrop-filter: blur(4px);
    border-bottom: 1px solid rgba(31, 31, 31, 0.5);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
}
.offer-bar-inner {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 1rem;
    padding: 0.5rem 1.5rem;
    font-size: 0.875rem;
}
.narrow-only { display: none; }
.countdown {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}
.timer-box {
    display: flex;
    flex-direction: column;
    align-items: center;
}
.timer-value {
    font-size: 1.5rem;
    font-weight: 700;
    color: #FFD700;
    background: rgba(31, 31, 31, 0.5);
    border-radius: 0.375rem;
    padding: 0.25rem 0.75rem;
}
.timer-label {
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin-top: 0.25rem;
}
.timer-sep {
    font-size: 1.875rem;
    font-weight: 700;
    color: #FFD700;
}

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 6rem 0 3rem;
    overflow: hidden;
}
.hero-grid {
    position: absolute;
    inset: 0;
    background-image: linear-gradient(rgba(31, 31, 31, 0.2) 1px, transparent 1px),
        linear-gradient(90deg, rgba(31, 31, 31, 0.2) 1px, transparent 1px);
    background-size: 40px 40px;
    mask-image: linear-gradient(to bottom, white 50%, transparent 100%);
}
.glow {
    position: absolute;
    width: 50%;
    height: 50%;
    border-radius: 9999px;
    filter: blur(64px);
    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}
.glow-gold { top: -25%; left: -25%; background: rgba(255, 215, 0, 0.1); }
.glow-blue { bottom: -25%; right: -25%; background: rgba(0, 191, 255, 0.1); animation-delay: 500ms; }
.hero-content {
    position: relative;
    z-index: 10;
    text-align: center;
}
.headline {
    font-size: 3.75rem;
    font-weight: 700;
    line-height: 1.25;
    max-width: 56rem;
    margin: 0 auto;
}
.headline-tail { margin-top: 0.5rem; }
.hero-promise {
    font-size: 1.25rem;
    max-width: 42rem;
    margin: 1.5rem auto 0;
    color: rgba(255, 255, 255, 0.8);
}
.hero-cta { margin-top: 2.5rem; }
.mockup { margin-top: 4rem; }
.mockup-frame {
    position: relative;
    margin: 0 auto;
    max-width: 56rem;
    aspect-ratio: 16 / 9;
    background: rgba(31, 31, 31, 0.5);
    border: 1px solid #1f1f1f;
    border-radius: 1rem;
    padding: 1rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}
.mockup-dots { position: absolute; top: 0.5rem; left: 0.5rem; display: flex; gap: 0.375rem; }
.dot { width: 0.75rem; height: 0.75rem; border-radius: 9999px; }
.dot-red { background: #ef4444; }
.dot-yellow { background: #facc15; }
.dot-green { background: #22c55e; }
.mockup-screen {
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #0a0a0a;
    border-radius: 0.5rem;
}
.mockup-icons {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1rem;
    color: rgba(0, 191, 255, 0.7);
}
.mockup-icon { width: 4rem; height: 4rem; }
.o-50 { opacity: 0.5; }
.o-60 { opacity: 0.6; }
.o-70 { opacity: 0.7; }
.o-80 { opacity: 0.8; }
.o-90 { opacity: 0.9; }

/* CTA */
.cta-button {
    display: inline-block;
    padding: 1rem 2.5rem;
    font-family: 'Poppins', sans-serif;
    font-size: 1.125rem;
    font-weight: 700;
    color: #0a0a0a;
    background: #FFD700;
    border-radius: 0.5rem;
    text-decoration: none;
    box-shadow: 0 10px 15px rgba(255, 215, 0, 0.2);
    transition: transform 300ms ease-out, box-shadow 300ms ease-out;
}
.cta-button:hover {
    transform: scale(1.05);
    box-shadow: 0 20px 25px rgba(255, 215, 0, 0.4);
}
.cta-wide {
    display: block;
    width: 100%;
    font-size: 1.25rem;
    padding: 1.25rem 0;
}

/* Sections */
.section { padding: 5rem 0; }
.section.tinted { background: rgba(31, 31, 31, 0.3); }
.section-title {
    font-size: 3rem;
    font-weight: 700;
    text-align: center;
}
.section-lead {
    font-size: 1.125rem;
    color: rgba(255, 255, 255, 0.7);
    text-align: center;
    max-width: 42rem;
    margin: 1rem auto 0;
}
.features-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    margin-top: 3rem;
}
.feature-card {
    background: #1f1f1f;
    border: 1px solid rgba(31, 31, 31, 0.5);
    border-radius: 0.75rem;
    padding: 2rem;
    text-align: center;
    transition: all 300ms;
}
.feature-card:hover {
    transform: scale(1.05);
    border-color: rgba(255, 215, 0, 0.5);
    box-shadow: 0 25px 50px rgba(255, 215, 0, 0.1);
}
.feature-card h3 { font-size: 1.5rem; font-weight: 600; margin-top: 0.5rem; }
.feature-card p { color: rgba(255, 255, 255, 0.7); margin-top: 0.75rem; }
.feature-icon { width: 2.5rem; height: 2.5rem; margin-bottom: 1rem; color: #FFD700; }

.value-panel {
    max-width: 48rem;
    margin: 0 auto;
    background: #1f1f1f;
    border: 2px solid #FFD700;
    border-radius: 1rem;
    box-shadow: 0 25px 50px rgba(255, 215, 0, 0.2);
    padding: 3rem;
    text-align: center;
}
.value-panel h2 { font-size: 2.25rem; font-weight: 700; }
.price-block { margin: 2rem 0; }
.eyebrow, .eyebrow-small {
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.7);
}
.eyebrow { text-transform: uppercase; letter-spacing: 0.1em; }
.price {
    font-size: 4.5rem;
    font-weight: 700;
    color: #FFD700;
    margin: 0.5rem 0;
}

/* Testimonials */
.carousel {
    position: relative;
    max-width: 42rem;
    height: 16rem;
    margin: 3rem auto 0;
}
.slide {
    position: absolute;
    inset: 0;
    transition: opacity 500ms ease-in-out;
}
.slide-active { opacity: 1; }
.slide-idle { opacity: 0; pointer-events: none; }
.testimonial-card {
    background: #1f1f1f;
    padding: 2rem;
    border-radius: 0.75rem;
    text-align: center;
    height: 100%;
    display: flex;
    flex-direction: column;
    justify-content: center;
}
.stars { display: flex; justify-content: center; margin-bottom: 0.5rem; }
.star { width: 1.25rem; height: 1.25rem; color: #FFD700; }
.testimonial-text { font-size: 1.125rem; font-style: italic; color: rgba(255, 255, 255, 0.9); }
.testimonial-author { display: flex; align-items: center; justify-content: center; margin-top: 1.5rem; }
.avatar {
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    margin-right: 1rem;
    border: 2px solid #FFD700;
}
.author-name { font-weight: 700; }
.author-role { font-size: 0.875rem; color: rgba(255, 255, 255, 0.6); }

/* How it works */
.steps-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2.5rem;
    margin: 3rem auto 0;
    max-width: 56rem;
}
.step { text-align: center; padding: 1.5rem; }
.step-number {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 5rem;
    height: 5rem;
    margin: 0 auto 1rem;
    background: #1f1f1f;
    border: 2px solid #FFD700;
    border-radius: 9999px;
    font-size: 2.25rem;
    font-weight: 700;
}
.step h3 { font-size: 1.5rem; font-weight: 600; }
.step p { color: rgba(255, 255, 255, 0.7); margin-top: 0.5rem; }

/* FAQ */
.faq-list {
    max-width: 48rem;
    margin: 3rem auto 0;
    background: #1f1f1f;
    border-radius: 0.75rem;
    overflow: hidden;
}
.faq-item { border-bottom: 1px solid #2a2a2a; }
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    text-align: left;
    padding: 1.25rem 1.5rem;
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
}
.question-text { font-family: 'Poppins', sans-serif; font-size: 1.125rem; font-weight: 600; }
.chevron {
    width: 1.5rem;
    height: 1.5rem;
    color: #FFD700;
    transition: transform 300ms;
}
.rotate-180 { transform: rotate(180deg); }
.faq-answer {
    overflow: hidden;
    transition: max-height 500ms ease-in-out;
}
.faq-answer p { padding: 0 1.5rem 1.25rem; color: rgba(255, 255, 255, 0.8); }
.max-h-0 { max-height: 0; }
.max-h-open { max-height: 24rem; }

/* Guarantee */
.guarantee-panel {
    max-width: 56rem;
    margin: 0 auto;
    background: #1f1f1f;
    border: 2px dashed #FFD700;
    border-radius: 1rem;
    padding: 3rem;
    display: flex;
    align-items: center;
    gap: 2rem;
}
.guarantee-panel h2 { font-size: 2.25rem; font-weight: 700; }
.guarantee-quote { font-size: 1.5rem; font-weight: 700; margin-top: 1rem; color: #FFD700; }
.seal { position: relative; width: 6rem; height: 6rem; flex-shrink: 0; }
.seal-layer { position: absolute; inset: 0; }

/* Final offer */
.recap {
    background: #1f1f1f;
    border-radius: 0.75rem;
    padding: 2rem;
    margin: 2.5rem 0;
    text-align: left;
}
.recap-line { display: flex; align-items: flex-start; margin: 1rem 0; }
.recap-check { width: 1.5rem; height: 1.5rem; color: #4ade80; margin: 0.25rem 0.75rem 0 0; flex-shrink: 0; }
.fine-print { font-size: 0.875rem; color: rgba(255, 255, 255, 0.6); margin-top: 1rem; }

/* Footer */
.footer {
    padding: 2rem 0;
    border-top: 1px solid #1f1f1f;
    text-align: center;
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.5);
}
.cnpj { margin-top: 0.5rem; }
.footer-links { display: flex; justify-content: center; gap: 1rem; margin-top: 1rem; }
.footer-links a { color: inherit; text-decoration: none; transition: color 150ms; }
.footer-links a:hover { color: #FFD700; }

/* Motion */
.reveal-hidden { opacity: 0; }
.animate-fade-in { animation: fadeIn 1s ease-out forwards; }
.animate-slide-up { animation: slideUp 0.8s ease-out forwards; }
.animate-float { animation: float 6s ease-in-out infinite; }
.animate-subtle-pulse { animation: subtlePulse 2s ease-in-out infinite; }
.spin-slow { animation: spin 20s linear infinite; }
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes slideUp {
    from { opacity: 0; transform: translateY(40px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-12px); }
}
@keyframes subtlePulse {
    0%, 100% { transform: scale(1); }
    50% { transform: scale(1.03); }
}
@keyframes pulse {
    50% { opacity: 0.5; }
}
@keyframes spin {
    to { transform: rotate(360deg); }
}

@media (max-width: 1024px) {
    .features-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (max-width: 768px) {
    .headline { font-size: 2.25rem; }
    .section-title { font-size: 2.25rem; }
    .steps-grid { grid-template-columns: 1fr; }
    .guarantee-panel { flex-direction: column; text-align: center; padding: 2rem; }
    .value-panel { padding: 2rem; }
    .carousel { height: 20rem; }
}
@media (max-width: 640px) {
    .features-grid { grid-template-columns: 1fr; }
    .wide-only { display: none; }
    .narrow-only { display: block; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_page() -> String {
        ServerRenderer::<Landing>::with_props(|| LandingProps {
            catalog: Rc::new(Catalog::load().unwrap()),
        })
        .hydratable(false)
        .render()
        .await
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle).unwrap_or_else(|| panic!("missing {}", needle))
    }

    #[tokio::test]
    async fn sections_render_in_order() {
        let html = render_page().await;
        let order = [
            "class=\"offer-bar\"",
            "id=\"hero\"",
            "id=\"features\"",
            "id=\"value\"",
            "id=\"testimonials\"",
            "id=\"how-it-works\"",
            "id=\"faq\"",
            "id=\"guarantee\"",
            "id=\"final-offer\"",
            "class=\"footer\"",
        ];
        let positions: Vec<usize> = order.iter().map(|needle| position(&html, needle)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[tokio::test]
    async fn every_cta_goes_to_checkout() {
        let html = render_page().await;
        let checkout = Catalog::load().unwrap().offer.checkout_url;
        let href = format!("href=\"{}\"", checkout);
        assert_eq!(html.matches("cta-button").count() - LANDING_CSS.matches("cta-button").count(), 3);
        assert_eq!(html.matches(&href).count(), 3);
        assert!(html.contains("Quero começar agora por R$47,90"));
        assert!(html.contains("EU QUERO ESSE DESCONTO"));
        assert!(html.contains("QUERO GARANTIR MINHA VAGA AGORA"));
    }

    #[tokio::test]
    async fn header_embeds_countdown() {
        let html = render_page().await;
        let bar = position(&html, "class=\"offer-bar\"");
        let hero = position(&html, "id=\"hero\"");
        let timer = position(&html, "class=\"countdown\"");
        assert!(bar < timer && timer < hero);
        assert!(html.contains("Horas") && html.contains("Min") && html.contains("Seg"));
    }

    #[tokio::test]
    async fn sections_start_hidden_until_seen() {
        let html = render_page().await;
        // Features, value, testimonials, steps, FAQ, guarantee, final offer.
        let wrappers = html.matches("reveal-hidden").count() - LANDING_CSS.matches("reveal-hidden").count();
        assert_eq!(wrappers, 7);
    }

    #[tokio::test]
    async fn faq_items_start_collapsed() {
        let html = render_page().await;
        assert_eq!(html.matches("class=\"faq-item\"").count(), 4);
        assert_eq!(html.matches("faq-answer max-h-0").count(), 4);
    }

    #[tokio::test]
    async fn value_counter_and_steps() {
        let html = render_page().await;
        assert!(html.contains("Todo o pacote vale mais de R$"));
        assert!(html.contains("<span>0</span>"));
        for n in 1..=3 {
            assert!(html.contains(&format!("<div class=\"step-number\">{}</div>", n)));
        }
    }

    #[tokio::test]
    async fn footer_has_current_year() {
        let html = render_page().await;
        let year = Local::now().year();
        assert!(html.contains(&format!("Copyright © {} - Máquina de Vendas IA.", year)));
    }
}

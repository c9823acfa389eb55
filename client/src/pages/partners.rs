//! Static partners page.

#[cfg(test)]
#[path = "partners_test.rs"]
mod partners_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partner {
    pub name: &'static str,
    pub link: &'static str,
    pub logo: &'static str,
}

pub const PARTNERS: [Partner; 15] = [
    Partner { name: "Insper", link: "https://www.insper.edu.br/", logo: "/assets/parceiros/insper.png" },
    Partner { name: "Mercado Bitcoin", link: "https://www.mercadobitcoin.com.br/", logo: "/assets/parceiros/mercadobtc.png" },
    Partner { name: "Ambev", link: "https://www.ambev.com.br/", logo: "/assets/parceiros/ambev.jpg" },
    Partner { name: "Itaú", link: "https://www.itau.com.br/", logo: "/assets/parceiros/itau.webp" },
    Partner { name: "Dotz", link: "https://www.dotz.com.br/", logo: "/assets/parceiros/dotz.png" },
    Partner { name: "GCB Investimentos", link: "https://gcbinvestimentos.com/", logo: "/assets/parceiros/gcb.png" },
    Partner { name: "Peer BR", link: "https://peerbr.com/", logo: "/assets/parceiros/peerbr.png" },
    Partner { name: "Coins", link: "https://coins.com.br/", logo: "/assets/parceiros/coins.jpg" },
    Partner {
        name: "Fernando Ulrich",
        link: "https://www.linkedin.com/in/fernando-ulrich-aa805821/",
        logo: "/assets/parceiros/ulrich.jpg",
    },
    Partner { name: "Blockchain Berkeley", link: "https://blockchain.berkeley.edu/", logo: "/assets/parceiros/berkeley.png" },
    Partner { name: "BeeTech", link: "https://beetech.global/", logo: "/assets/parceiros/beetech.png" },
    Partner { name: "Block Master", link: "https://www.blockmaster.com.br/", logo: "/assets/parceiros/blockmaster.png" },
    Partner { name: "iCoLab", link: "https://icolab.org.br/", logo: "/assets/parceiros/icolab.png" },
    Partner { name: "Mar Ventures", link: "https://www.mar.ventures/", logo: "/assets/parceiros/marventures.png" },
    Partner { name: "Portal do Bitcoin", link: "https://portaldobitcoin.uol.com.br/", logo: "/assets/parceiros/portaldobtc.png" },
];

#[component]
pub fn PartnerGrid(#[prop(default = PARTNERS.len())] limit: usize) -> impl IntoView {
    view! {
        <div class="partner-grid">
            {PARTNERS
                .into_iter()
                .take(limit)
                .map(|partner| {
                    view! {
                        <a class="partner-card" href=partner.link target="_blank" rel="noopener noreferrer">
                            <img src=partner.logo alt=partner.name loading="lazy"/>
                            <span>{partner.name}</span>
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn PartnersPage() -> impl IntoView {
    view! {
        <section class="hero hero--compact">
            <h1>"Parceiros"</h1>
            <p>
                "Empresas, instituições e pessoas que constroem com a Blockchain Insper o ecossistema blockchain no Brasil."
            </p>
        </section>
        <section class="page">
            <PartnerGrid/>
        </section>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::route_guard::RouteGuard;
use crate::pages::admin::{
    admins::AdminsPage, backups::BackupsPage, contacts::ContactsSettingsPage, dashboard::DashboardPage,
    event_form::EventFormPage, events::ManageEventsPage, login::LoginPage, messages::MessagesPage,
    news::ManageNewsPage, news_form::NewsFormPage, profile::ProfilePage,
};
use crate::pages::{
    contact::ContactPage, event_detail::EventDetailPage, events::EventsPage, home::HomePage,
    news::NewsPage, news_detail::NewsDetailPage, not_found::NotFoundPage, partners::PartnersPage,
};
use crate::state::auth::WebAuth;
use crate::util::browser;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth session and kicks off token validation once the app is
/// live in the browser. Until then the session stays unresolved, so the
/// server and the first client render both show the guard's loading state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = WebAuth::provide();
    browser::spawn(auth.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/blockchain-insper.css"/>
        <Title text="Blockchain Insper"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <ParentRoute path=StaticSegment("") view=PublicLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("eventos") view=EventsPage/>
                    <Route path=(StaticSegment("eventos"), ParamSegment("id")) view=EventDetailPage/>
                    <Route path=StaticSegment("noticias") view=NewsPage/>
                    <Route path=(StaticSegment("noticias"), ParamSegment("id")) view=NewsDetailPage/>
                    <Route path=StaticSegment("parceiros") view=PartnersPage/>
                    <Route path=StaticSegment("parcerias") view=PartnersPage/>
                    <Route path=StaticSegment("contato") view=ContactPage/>
                </ParentRoute>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                <ParentRoute path=StaticSegment("admin") view=ProtectedAdmin>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("eventos") view=ManageEventsPage/>
                    <Route path=(StaticSegment("eventos"), StaticSegment("novo")) view=EventFormPage/>
                    <Route
                        path=(StaticSegment("eventos"), StaticSegment("editar"), ParamSegment("id"))
                        view=EventFormPage
                    />
                    <Route path=StaticSegment("noticias") view=ManageNewsPage/>
                    <Route path=(StaticSegment("noticias"), StaticSegment("novo")) view=NewsFormPage/>
                    <Route
                        path=(StaticSegment("noticias"), StaticSegment("editar"), ParamSegment("id"))
                        view=NewsFormPage
                    />
                    <Route path=StaticSegment("contatos") view=ContactsSettingsPage/>
                    <Route path=StaticSegment("mensagens") view=MessagesPage/>
                    <Route path=StaticSegment("admins") view=AdminsPage/>
                    <Route path=StaticSegment("perfil") view=ProfilePage/>
                    <Route path=StaticSegment("backups") view=BackupsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Navbar and footer around the public pages.
#[component]
fn PublicLayout() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="site-main">
            <Outlet/>
        </main>
        <Footer/>
    }
}

/// Every `/admin/*` screen except login: guard first, then the admin chrome.
#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! {
        <RouteGuard>
            <AdminLayout>
                <Outlet/>
            </AdminLayout>
        </RouteGuard>
    }
}

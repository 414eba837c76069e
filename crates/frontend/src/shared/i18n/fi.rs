//! Finnish strings.

pub const ENTRIES: &[(&str, &str)] = &[
    ("app.title", "Huolto & Vuokraus"),

    ("common.all", "Kaikki"),
    ("common.back", "Takaisin"),
    ("common.cancel", "Peruuta"),
    ("common.created_at", "Luotu"),
    ("common.delete", "Poista"),
    ("common.edit", "Muokkaa"),
    ("common.loading", "Ladataan..."),
    ("common.not_found", "Sivua ei löytynyt"),
    ("common.refresh", "Päivitä"),
    ("common.save", "Tallenna"),
    ("common.saving", "Tallennetaan..."),

    ("nav.dashboard", "Etusivu"),
    ("nav.customers", "Asiakkaat"),
    ("nav.rentals", "Vuokraukset"),
    ("nav.sales_targets", "Myyntitavoitteet"),
    ("nav.logout", "Kirjaudu ulos"),

    ("login.title", "Kirjaudu sisään"),
    ("login.username", "Käyttäjätunnus"),
    ("login.password", "Salasana"),
    ("login.submit", "Kirjaudu"),
    ("login.submitting", "Kirjaudutaan..."),
    ("login.failed", "Virheellinen käyttäjätunnus tai salasana"),

    ("dashboard.welcome", "Tervetuloa"),
    ("dashboard.admin.title", "Ylläpito"),
    ("dashboard.manager.title", "Hallinta"),
    ("dashboard.work.title", "Työt"),

    ("error.missing_field", "Pakollinen kenttä on tyhjä"),
    ("error.invalid_amount", "Summa ei ole kelvollinen luku"),
    ("error.invalid_date", "Päivämäärä ei ole kelvollinen"),
    ("error.invalid_reference", "Valittu kohde ei ole kelvollinen"),
    ("error.invalid_period", "Jakso ei voi päättyä ennen alkuaan"),
    ("error.network", "Palvelimeen ei saatu yhteyttä"),
    ("error.unauthorized", "Istunto on vanhentunut tai oikeudet puuttuvat"),
    ("error.not_found", "Pyydettyä kohdetta ei löytynyt"),
    ("error.validation", "Palvelin hylkäsi tiedot"),
    ("error.server", "Palvelinvirhe, yritä myöhemmin uudelleen"),
    ("error.decode", "Odottamaton vastaus palvelimelta"),

    ("customer.type.private", "Yksityishenkilö"),
    ("customer.type.company", "Yritys"),
    ("customer.create.title", "Uusi asiakas"),
    ("customer.created", "Asiakas luotu"),
    ("customer.field.customer_type", "Asiakastyyppi"),
    ("customer.field.name", "Nimi"),
    ("customer.field.company_name", "Yrityksen nimi"),
    ("customer.field.contact_person", "Yhteyshenkilö"),
    ("customer.field.business_id", "Y-tunnus"),
    ("customer.field.email", "Sähköposti"),
    ("customer.field.phone", "Puhelin"),
    ("customer.field.street_address", "Katuosoite"),
    ("customer.field.postal_code", "Postinumero"),
    ("customer.field.city", "Kaupunki"),
    ("customer.field.owner_name", "Omistaja"),
    ("customer.field.notes", "Lisätiedot"),
    ("customer.list.title", "Asiakkaat"),
    ("customer.list.new", "Uusi asiakas"),
    ("customer.list.search", "Hae asiakkaita"),
    ("customer.list.contact", "Yhteystiedot"),
    ("customer.list.empty", "Asiakkaita ei löytynyt"),
    ("customer.list.load_failed", "Asiakkaiden lataus epäonnistui"),

    ("rental.status.active", "Aktiivinen"),
    ("rental.status.reserved", "Varattu"),
    ("rental.status.returned", "Palautettu"),
    ("rental.status.overdue", "Myöhässä"),
    ("rental.status.cancelled", "Peruttu"),
    ("rental.list.title", "Vuokraukset"),
    ("rental.list.empty", "Vuokrauksia ei löytynyt"),
    ("rental.list.load_failed", "Vuokrausten lataus epäonnistui"),
    ("rental.details.title", "Vuokraus"),
    ("rental.details.load_failed", "Vuokrauksen lataus epäonnistui"),
    ("rental.details.overdue_warning", "Vuokraus on ylittänyt eräpäivänsä"),
    ("rental.details.machine", "Kone"),
    ("rental.details.customer", "Asiakas"),
    ("rental.details.period", "Vuokra-aika"),
    ("rental.field.machine_model", "Malli"),
    ("rental.field.machine_serial", "Sarjanumero"),
    ("rental.field.customer_name", "Asiakas"),
    ("rental.field.customer_address", "Osoite"),
    ("rental.field.status", "Tila"),
    ("rental.field.start_date", "Alkupäivä"),
    ("rental.field.due_date", "Eräpäivä"),
    ("rental.field.end_date", "Palautettu"),
    ("rental.field.duration_days", "Kesto (päivää)"),
    ("rental.field.daily_rate", "Päivähinta"),
    ("rental.field.notes", "Lisätiedot"),

    ("sales_target.type.monthly", "Kuukausi"),
    ("sales_target.type.quarterly", "Vuosineljännes"),
    ("sales_target.type.yearly", "Vuosi"),
    ("sales_target.list.title", "Myyntitavoitteet"),
    ("sales_target.list.new", "Uusi tavoite"),
    ("sales_target.list.active_only", "Vain aktiiviset"),
    ("sales_target.list.period", "Jakso"),
    ("sales_target.list.state", "Tila"),
    ("sales_target.list.empty", "Ei myyntitavoitteita"),
    ("sales_target.list.load_failed", "Myyntitavoitteiden lataus epäonnistui"),
    ("sales_target.dialog.create_title", "Uusi myyntitavoite"),
    ("sales_target.dialog.edit_title", "Muokkaa myyntitavoitetta"),
    ("sales_target.field.user", "Käyttäjä"),
    ("sales_target.field.user_placeholder", "Valitse käyttäjä"),
    ("sales_target.field.target_type", "Tavoitetyyppi"),
    ("sales_target.field.amount", "Tavoitesumma"),
    ("sales_target.field.period_start", "Jakson alku"),
    ("sales_target.field.period_end", "Jakson loppu"),
    ("sales_target.field.notes", "Lisätiedot"),
    ("sales_target.active", "Aktiivinen"),
    ("sales_target.inactive", "Ei aktiivinen"),
    ("sales_target.created", "Myyntitavoite luotu"),
    ("sales_target.updated", "Myyntitavoite päivitetty"),
    ("sales_target.deleted", "Myyntitavoite poistettu käytöstä"),
    ("sales_target.confirm_delete", "Poistetaanko myyntitavoite käytöstä?"),
    ("sales_target.users_failed", "Käyttäjien lataus epäonnistui"),
];

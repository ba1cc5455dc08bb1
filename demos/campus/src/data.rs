//! Embedded campus loop and stops.

/// The circuit, `[lon, lat]` per row, first row repeated at the end.
pub const ROUTE_CSV: &str = "\
lon,lat\n\
-77.085862,-12.054858\n\
-77.085402,-12.054911\n\
-77.085367,-12.05492\n\
-77.085332,-12.054926\n\
-77.085332,-12.054926\n\
-77.085359,-12.054955\n\
-77.08537,-12.054992\n\
-77.085363,-12.055031\n\
-77.08534,-12.055063\n\
-77.085305,-12.055082\n\
-77.085305,-12.055082\n\
-77.085265,-12.055084\n\
-77.085228,-12.055069\n\
-77.085096,-12.055159\n\
-77.084988,-12.055224\n\
-77.084775,-12.055352\n\
-77.084775,-12.055352\n\
-77.084805,-12.055618\n\
-77.084813,-12.055689\n\
-77.084819,-12.05574\n\
-77.084902,-12.055934\n\
-77.084963,-12.056031\n\
-77.085105,-12.056259\n\
-77.085133,-12.056304\n\
-77.085145,-12.056323\n\
-77.085208,-12.056445\n\
-77.08539,-12.056868\n\
-77.08556,-12.057307\n\
-77.085636,-12.05751\n\
-77.085636,-12.05751\n\
-77.085749,-12.057781\n\
-77.085761,-12.057855\n\
-77.085757,-12.057911\n\
-77.085736,-12.057984\n\
-77.085692,-12.058066\n\
-77.085652,-12.058127\n\
-77.085464,-12.058237\n\
-77.085153,-12.058412\n\
-77.084908,-12.058541\n\
-77.084908,-12.058541\n\
-77.084887,-12.058677\n\
-77.084652,-12.058848\n\
-77.084627,-12.058889\n\
-77.08461,-12.058935\n\
-77.084617,-12.058987\n\
-77.084617,-12.058987\n\
-77.084631,-12.059078\n\
-77.084506,-12.059645\n\
-77.084417,-12.060045\n\
-77.084397,-12.060126\n\
-77.084364,-12.060269\n\
-77.084277,-12.06064\n\
-77.084239,-12.060821\n\
-77.084215,-12.060934\n\
-77.084215,-12.060934\n\
-77.082938,-12.060772\n\
-77.082857,-12.060762\n\
-77.08283,-12.060759\n\
-77.082438,-12.060707\n\
-77.082306,-12.06069\n\
-77.081359,-12.060482\n\
-77.081255,-12.060456\n\
-77.080783,-12.060335\n\
-77.080669,-12.060306\n\
-77.080574,-12.06028\n\
-77.079945,-12.060111\n\
-77.079831,-12.060067\n\
-77.079735,-12.059978\n\
-77.07968,-12.059903\n\
-77.079653,-12.059809\n\
-77.079653,-12.059711\n\
-77.079666,-12.059623\n\
-77.079676,-12.059592\n\
-77.079703,-12.059506\n\
-77.07971,-12.059486\n\
-77.079824,-12.059032\n\
-77.079917,-12.058638\n\
-77.080096,-12.057904\n\
-77.08016,-12.057659\n\
-77.08018,-12.057585\n\
-77.080223,-12.05742\n\
-77.080268,-12.05725\n\
-77.080279,-12.057208\n\
-77.080288,-12.057176\n\
-77.080296,-12.057145\n\
-77.080332,-12.056956\n\
-77.080389,-12.056686\n\
-77.08044,-12.056579\n\
-77.080476,-12.056523\n\
-77.080589,-12.056413\n\
-77.080754,-12.056413\n\
-77.080815,-12.056374\n\
-77.080872,-12.056335\n\
-77.081185,-12.05613\n\
-77.081606,-12.055868\n\
-77.081707,-12.055798\n\
-77.08192,-12.055667\n\
-77.082099,-12.055555\n\
-77.082246,-12.055464\n\
-77.08236,-12.0554\n\
-77.082381,-12.055385\n\
-77.082424,-12.055361\n\
-77.082467,-12.055341\n\
-77.0825,-12.055333\n\
-77.082516,-12.055329\n\
-77.082554,-12.055335\n\
-77.082574,-12.055342\n\
-77.082586,-12.055347\n\
-77.082685,-12.055413\n\
-77.082762,-12.05547\n\
-77.082834,-12.055494\n\
-77.082908,-12.055496\n\
-77.083235,-12.055458\n\
-77.083298,-12.055413\n\
-77.083402,-12.055208\n\
-77.083542,-12.05489\n\
-77.083606,-12.054768\n\
-77.083639,-12.054722\n\
-77.083682,-12.054677\n\
-77.083766,-12.054641\n\
-77.083772,-12.054638\n\
-77.083923,-12.054554\n\
-77.083935,-12.054547\n\
-77.083976,-12.054502\n\
-77.084386,-12.054267\n\
-77.084727,-12.054064\n\
-77.084756,-12.054043\n\
-77.084986,-12.053903\n\
-77.085024,-12.053861\n\
-77.085099,-12.053806\n\
-77.085139,-12.053786\n\
-77.085194,-12.053775\n\
-77.08529,-12.053765\n\
-77.085499,-12.053743\n\
-77.085651,-12.053727\n\
-77.085676,-12.053724\n\
-77.085893,-12.053702\n\
-77.085966,-12.053691\n\
-77.086041,-12.053674\n\
-77.086101,-12.053632\n\
-77.086139,-12.053599\n\
-77.08621,-12.053533\n\
-77.086288,-12.053502\n\
-77.086398,-12.053483\n\
-77.086405,-12.053511\n\
-77.086453,-12.053882\n\
-77.08649,-12.054172\n\
-77.086523,-12.054426\n\
-77.086546,-12.054616\n\
-77.086571,-12.054667\n\
-77.086606,-12.054744\n\
-77.086521,-12.054783\n\
-77.086224,-12.054818\n\
-77.085942,-12.054849\n\
-77.085862,-12.054858\n\
-77.085862,-12.054858\n\
";

/// Stops in match-priority order.
pub const STOPS_CSV: &str = "\
name,lat,lon\n\
Odontología,-12.054874,-77.085864\n\
Plaza Cívica,-12.056032,-77.084961\n\
Gimnasio,-12.059645,-77.084506\n\
Comedor,-12.060779,-77.082937\n\
Ing. Industrial,-12.060286,-77.080576\n\
Puerta 2,-12.059591,-77.079673\n\
F. de Derecho,-12.057659,-77.08016\n\
Clínica,-12.055556,-77.082098\n\
Puerta 7,-12.054729,-77.083637\n\
Sistemas,-12.053732,-77.085652\n\
";
